use projectboard_domain::dragdrop::{encode_project, DragPayload, DragSource};
use projectboard_domain::{Project, ProjectId};

/// One rendered project. Holds a read-only clone of the record and is the
/// drag-source side of the protocol; it never mutates the record itself.
pub struct ItemView {
    project: Project,
}

impl ItemView {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn id(&self) -> ProjectId {
        self.project.id
    }

    pub fn title(&self) -> &str {
        &self.project.title
    }

    pub fn description(&self) -> &str {
        &self.project.description
    }

    pub fn people_line(&self) -> String {
        format!("{} assigned", self.project.people_label())
    }
}

impl DragSource for ItemView {
    fn drag_start(&mut self, payload: &mut DragPayload) {
        encode_project(payload, &self.project);
        tracing::debug!("Drag started for project {}", self.project.id);
    }

    fn drag_end(&mut self) {
        tracing::debug!("Drag ended for project {}", self.project.id);
    }
}
