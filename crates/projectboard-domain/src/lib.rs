pub mod draft;
pub mod dragdrop;
pub mod project;
pub mod store;

pub use draft::{DraftError, DraftRules, ProjectDraft};
pub use dragdrop::{DragEffect, DragPayload, DragSource, DropTarget, PROJECT_ID_MEDIA_TYPE};
pub use project::{Project, ProjectId, ProjectStatus};
pub use store::{ProjectStore, SharedStore, Subscriber};
