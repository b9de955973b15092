use projectboard_domain::dragdrop::{DragPayload, DragSource, DropTarget};
use projectboard_domain::ProjectStatus;

/// State of at most one drag gesture. Owns the payload from drag-start
/// until the gesture ends; routing between the source and whichever target
/// the user hovers goes through here, never directly.
#[derive(Default)]
pub struct DragGesture {
    payload: Option<DragPayload>,
    origin: Option<ProjectStatus>,
    hover: Option<ProjectStatus>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn origin(&self) -> Option<ProjectStatus> {
        self.origin
    }

    pub fn hover(&self) -> Option<ProjectStatus> {
        self.hover
    }

    /// Starts a gesture: a fresh payload, filled in by the source.
    pub fn begin(&mut self, origin: ProjectStatus, source: &mut dyn DragSource) {
        let mut payload = DragPayload::new();
        source.drag_start(&mut payload);
        self.payload = Some(payload);
        self.origin = Some(origin);
        self.hover = None;
    }

    /// The payload is now over `bucket`. Returns whether the target
    /// accepted the hover; only an accepting target can receive the drop.
    pub fn enter(&mut self, bucket: ProjectStatus, target: &mut dyn DropTarget) -> bool {
        let Some(payload) = &self.payload else {
            return false;
        };
        let accepted = target.drag_over(payload);
        self.hover = if accepted { Some(bucket) } else { None };
        accepted
    }

    /// The payload moved off the hovered target without dropping.
    pub fn leave(&mut self, target: &mut dyn DropTarget) {
        if self.hover.take().is_some() {
            target.drag_leave();
        }
    }

    /// Drops onto the hovered target, then clears its affordance. Returns
    /// false when nothing is hovered; the gesture stays alive in that case.
    pub fn drop_on(&mut self, target: &mut dyn DropTarget) -> bool {
        if self.hover.is_none() {
            return false;
        }
        let Some(payload) = &self.payload else {
            return false;
        };
        target.accept_drop(payload);
        self.hover = None;
        target.drag_leave();
        true
    }

    /// Ends the gesture, dropped or abandoned. The source hears drag-end
    /// when it still exists; after a drop it may already have been rebuilt.
    pub fn end(&mut self, source: Option<&mut dyn DragSource>) {
        if let Some(source) = source {
            source.drag_end();
        }
        self.payload = None;
        self.origin = None;
        self.hover = None;
    }
}
