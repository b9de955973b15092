use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use projectboard_domain::dragdrop::{DragPayload, DropTarget, PROJECT_ID_MEDIA_TYPE};
use projectboard_domain::{Project, ProjectStatus, SharedStore};
use uuid::Uuid;

use crate::item_view::ItemView;

/// The view for one bucket. Subscribes to the store at construction and on
/// every broadcast throws away its rendered items and rebuilds one
/// [`ItemView`] per record in its bucket, in store order. No diffing; the
/// list is human-scale.
///
/// Also the drop-target side of the drag protocol: the droppable
/// affordance tracks drag-over/drag-leave, and a drop turns into a status
/// transition request on the store.
pub struct ListView {
    bucket: ProjectStatus,
    store: SharedStore,
    // shared with the subscription callback, which runs while the store
    // (not this view) is borrowed
    items: Rc<RefCell<Vec<ItemView>>>,
    droppable: bool,
}

impl ListView {
    pub fn new(bucket: ProjectStatus, store: &SharedStore) -> Self {
        let items = Rc::new(RefCell::new(Vec::new()));
        let cache = Rc::clone(&items);
        store
            .borrow_mut()
            .subscribe(Box::new(move |projects: &[Project]| {
                let rebuilt: Vec<ItemView> = projects
                    .iter()
                    .filter(|project| project.status == bucket)
                    .cloned()
                    .map(ItemView::new)
                    .collect();
                *cache.borrow_mut() = rebuilt;
            }));

        Self {
            bucket,
            store: Rc::clone(store),
            items,
            droppable: false,
        }
    }

    pub fn bucket(&self) -> ProjectStatus {
        self.bucket
    }

    pub fn droppable(&self) -> bool {
        self.droppable
    }

    pub fn items(&self) -> Ref<'_, Vec<ItemView>> {
        self.items.borrow()
    }

    pub fn items_mut(&self) -> RefMut<'_, Vec<ItemView>> {
        self.items.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl DropTarget for ListView {
    fn drag_over(&mut self, payload: &DragPayload) -> bool {
        if payload.has_media_type(PROJECT_ID_MEDIA_TYPE) {
            self.droppable = true;
            true
        } else {
            false
        }
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
    }

    fn accept_drop(&mut self, payload: &DragPayload) {
        let Some(text) = payload.data(PROJECT_ID_MEDIA_TYPE) else {
            return;
        };
        let Ok(id) = Uuid::parse_str(text) else {
            tracing::debug!("Dropped payload is not a project id: {}", text);
            return;
        };
        // the re-render arrives through the subscription broadcast, not here
        self.store.borrow_mut().transition(id, self.bucket);
    }
}
