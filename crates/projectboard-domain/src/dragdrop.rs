//! The drag-and-drop protocol: a transient payload carrying the dragged
//! project's id as media-typed text, and the two capability contracts the
//! views implement. A drop target never sees the source directly; the
//! payload is the only channel between them.

use crate::project::Project;

/// Wire format of the payload: the record id verbatim, as plain text.
pub const PROJECT_ID_MEDIA_TYPE: &str = "text/plain";

/// Hint for the kind of operation the source intends. Not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Move,
    Copy,
}

/// Carrier for exactly one media-typed text value, valid for the duration
/// of a single drag gesture.
#[derive(Debug, Default)]
pub struct DragPayload {
    media_type: Option<String>,
    data: String,
    effect_allowed: Option<DragEffect>,
}

impl DragPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, media_type: &str, data: &str) {
        self.media_type = Some(media_type.to_string());
        self.data = data.to_string();
    }

    /// The stored text, but only when the declared media type matches the
    /// one asked for. A target that expects plain text sees nothing else.
    pub fn data(&self, media_type: &str) -> Option<&str> {
        if self.has_media_type(media_type) {
            Some(&self.data)
        } else {
            None
        }
    }

    pub fn has_media_type(&self, media_type: &str) -> bool {
        self.media_type.as_deref() == Some(media_type)
    }

    pub fn allow_effect(&mut self, effect: DragEffect) {
        self.effect_allowed = Some(effect);
    }

    pub fn effect_allowed(&self) -> Option<DragEffect> {
        self.effect_allowed
    }
}

/// Drag-source side of the protocol: what a rendered item must support to
/// be picked up.
pub trait DragSource {
    /// Encode this source's identity into the payload.
    fn drag_start(&mut self, payload: &mut DragPayload);

    /// Observational; fires after the gesture ends, dropped or not.
    fn drag_end(&mut self);
}

/// Drop-target side of the protocol: what a region must support to receive
/// a drop.
pub trait DropTarget {
    /// Accept or decline the hovering payload. Declining means no
    /// affordance and no drop. Re-fired while the payload hovers, so it
    /// must tolerate repetition.
    fn drag_over(&mut self, payload: &DragPayload) -> bool;

    /// The payload moved off without a drop; revert the affordance.
    fn drag_leave(&mut self);

    /// Take the payload. Extracts the id and requests the transition; does
    /// not touch the affordance or the rendered list itself.
    fn accept_drop(&mut self, payload: &DragPayload);
}

/// Builds the payload the way every item does: id as plain text, move
/// intent declared.
pub fn encode_project(payload: &mut DragPayload, project: &Project) {
    payload.set_data(PROJECT_ID_MEDIA_TYPE, &project.id.to_string());
    payload.allow_effect(DragEffect::Move);
}
