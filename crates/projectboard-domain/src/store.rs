use std::cell::RefCell;
use std::rc::Rc;

use crate::project::{Project, ProjectId, ProjectStatus};

/// Change callback registered by a view. Receives a fresh snapshot of the
/// full record list, in creation order, once per accepted mutation.
pub type Subscriber = Box<dyn FnMut(&[Project])>;

/// The one store handle every view is constructed with. Single-threaded by
/// design; the event loop delivers one input at a time.
pub type SharedStore = Rc<RefCell<ProjectStore>>;

/// Authoritative, ordered list of projects plus the subscriber list.
///
/// Only the store mutates a record's status; views request transitions and
/// otherwise see clones. Subscribers are never removed — views live for the
/// process lifetime. Add unsubscription before reusing this in a
/// long-running host.
pub struct ProjectStore {
    projects: Vec<Project>,
    subscribers: Vec<Subscriber>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a callback. Not invoked until the next accepted mutation.
    ///
    /// Callbacks run while the store is borrowed, so they must not call
    /// back into it; they cache what they need and render later.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Appends a new active project and notifies every subscriber. The
    /// caller has already validated the input; the store accepts anything.
    pub fn create(&mut self, title: String, description: String, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        tracing::info!("Creating project: {} (id: {})", project.title, project.id);
        self.projects.push(project);
        self.broadcast();
        id
    }

    /// Moves a project to another bucket. An unknown id is ignored — a
    /// stale drag payload is expected, not an error. An equal status is a
    /// no-op with no broadcast.
    pub fn transition(&mut self, id: ProjectId, new_status: ProjectStatus) {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) if project.status != new_status => {
                project.status = new_status;
                tracing::info!("Project {} moved to {}", id, new_status.label());
                self.broadcast();
            }
            Some(_) => {}
            None => {
                tracing::debug!("Ignoring transition for unknown project {}", id);
            }
        }
    }

    /// Clone of the full record list, in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn broadcast(&mut self) {
        let snapshot = self.projects.clone();
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_subscriber(count: Rc<Cell<usize>>) -> Subscriber {
        Box::new(move |_| count.set(count.get() + 1))
    }

    #[test]
    fn test_subscribe_is_not_invoked_immediately() {
        let mut store = ProjectStore::new();
        let count = Rc::new(Cell::new(0));
        store.subscribe(counting_subscriber(Rc::clone(&count)));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_create_broadcasts_to_all_subscribers() {
        let mut store = ProjectStore::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        store.subscribe(counting_subscriber(Rc::clone(&first)));
        store.subscribe(counting_subscriber(Rc::clone(&second)));

        store.create("a".to_string(), "aaaaa".to_string(), 1);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_broadcast_runs_in_registration_order() {
        let mut store = ProjectStore::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            store.subscribe(Box::new(move |_| log.borrow_mut().push(name)));
        }

        store.create("a".to_string(), "aaaaa".to_string(), 1);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_subscribers_receive_full_snapshot() {
        let mut store = ProjectStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            store.subscribe(Box::new(move |projects: &[Project]| {
                *seen.borrow_mut() = projects.iter().map(|p| p.title.clone()).collect();
            }));
        }

        store.create("a".to_string(), "aaaaa".to_string(), 1);
        store.create("b".to_string(), "bbbbb".to_string(), 2);
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_transition_changes_status_and_broadcasts() {
        let mut store = ProjectStore::new();
        let id = store.create("a".to_string(), "aaaaa".to_string(), 1);

        let count = Rc::new(Cell::new(0));
        store.subscribe(counting_subscriber(Rc::clone(&count)));

        store.transition(id, ProjectStatus::Finished);
        assert_eq!(count.get(), 1);
        assert_eq!(store.snapshot()[0].status, ProjectStatus::Finished);
    }

    #[test]
    fn test_same_status_transition_is_silent() {
        let mut store = ProjectStore::new();
        let id = store.create("a".to_string(), "aaaaa".to_string(), 1);

        let count = Rc::new(Cell::new(0));
        store.subscribe(counting_subscriber(Rc::clone(&count)));

        store.transition(id, ProjectStatus::Finished);
        store.transition(id, ProjectStatus::Finished);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_transition_back_to_active_broadcasts_again() {
        let mut store = ProjectStore::new();
        let id = store.create("a".to_string(), "aaaaa".to_string(), 1);

        let count = Rc::new(Cell::new(0));
        store.subscribe(counting_subscriber(Rc::clone(&count)));

        store.transition(id, ProjectStatus::Finished);
        store.transition(id, ProjectStatus::Active);
        assert_eq!(count.get(), 2);
        assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut store = ProjectStore::new();
        store.create("a".to_string(), "aaaaa".to_string(), 1);

        let count = Rc::new(Cell::new(0));
        store.subscribe(counting_subscriber(Rc::clone(&count)));

        store.transition(uuid::Uuid::new_v4(), ProjectStatus::Finished);
        assert_eq!(count.get(), 0);
        assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_transition_preserves_creation_order() {
        let mut store = ProjectStore::new();
        let a = store.create("a".to_string(), "aaaaa".to_string(), 1);
        store.create("b".to_string(), "bbbbb".to_string(), 1);
        store.create("c".to_string(), "ccccc".to_string(), 1);

        store.transition(a, ProjectStatus::Finished);
        let titles: Vec<_> = store.snapshot().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut store = ProjectStore::new();
        store.create("a".to_string(), "aaaaa".to_string(), 1);

        let mut snapshot = store.snapshot();
        snapshot[0].status = ProjectStatus::Finished;
        snapshot.clear();

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_every_record_has_unique_id_and_known_status() {
        let mut store = ProjectStore::new();
        let a = store.create("a".to_string(), "aaaaa".to_string(), 1);
        let b = store.create("b".to_string(), "bbbbb".to_string(), 2);
        store.transition(a, ProjectStatus::Finished);
        store.transition(b, ProjectStatus::Finished);
        store.transition(a, ProjectStatus::Active);

        let snapshot = store.snapshot();
        let mut ids: Vec<_> = snapshot.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), snapshot.len());
        for project in &snapshot {
            assert!(matches!(
                project.status,
                ProjectStatus::Active | ProjectStatus::Finished
            ));
        }
    }
}
