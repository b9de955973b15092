use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use projectboard_core::{AppConfig, BoardResult};
use projectboard_domain::{DraftRules, ProjectId, ProjectStatus, SharedStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::{
    events::{Event, EventHandler},
    form::{FormAction, ProjectForm},
    gesture::DragGesture,
    list_view::ListView,
    selection::SelectionState,
    ui,
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    NewProject,
}

/// The bootstrap: one store handle, one view per bucket, the input form
/// and the gesture driver. Key events route here; everything else reacts
/// through store broadcasts.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: ProjectStatus,
    pub store: SharedStore,
    pub active: ListView,
    pub finished: ListView,
    pub active_selection: SelectionState,
    pub finished_selection: SelectionState,
    pub form: ProjectForm,
    pub gesture: DragGesture,
    pub dragging: Option<ProjectId>,
}

impl App {
    pub fn new(store: SharedStore, config: &AppConfig) -> Self {
        let active = ListView::new(ProjectStatus::Active, &store);
        let finished = ListView::new(ProjectStatus::Finished, &store);

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: ProjectStatus::Active,
            active,
            finished,
            active_selection: SelectionState::new(),
            finished_selection: SelectionState::new(),
            form: ProjectForm::new(DraftRules::from_config(config)),
            gesture: DragGesture::new(),
            dragging: None,
            store,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self, bucket: ProjectStatus) -> &ListView {
        match bucket {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn selection(&self, bucket: ProjectStatus) -> &SelectionState {
        match bucket {
            ProjectStatus::Active => &self.active_selection,
            ProjectStatus::Finished => &self.finished_selection,
        }
    }

    fn selection_mut(&mut self, bucket: ProjectStatus) -> &mut SelectionState {
        match bucket {
            ProjectStatus::Active => &mut self.active_selection,
            ProjectStatus::Finished => &mut self.finished_selection,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::NewProject => match self.form.handle_key(key.code, &self.store) {
                FormAction::Submitted => {
                    self.mode = AppMode::Normal;
                    self.sync_selections();
                }
                FormAction::Cancel => self.mode = AppMode::Normal,
                FormAction::None => {}
            },
            AppMode::Normal => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    self.quit();
                } else if self.gesture.is_dragging() {
                    self.handle_drag_key(key.code);
                } else {
                    self.handle_normal_key(key.code);
                }
            }
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n') => {
                self.form.clear();
                self.mode = AppMode::NewProject;
            }
            KeyCode::Char('1') => self.focus = ProjectStatus::Active,
            KeyCode::Char('2') => self.focus = ProjectStatus::Finished,
            KeyCode::Tab => self.focus = self.focus.other(),
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.view(self.focus).len();
                self.selection_mut(self.focus).next(len);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selection_mut(self.focus).prev();
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.pick_up(),
            _ => {}
        }
    }

    fn handle_drag_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.cancel_drag(),
            KeyCode::Char('1') => self.hover_bucket(ProjectStatus::Active),
            KeyCode::Char('2') => self.hover_bucket(ProjectStatus::Finished),
            KeyCode::Tab
            | KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Left
            | KeyCode::Right => {
                let current = self
                    .gesture
                    .hover()
                    .or(self.gesture.origin())
                    .unwrap_or(self.focus);
                self.hover_bucket(current.other());
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.drop_payload(),
            _ => {}
        }
    }

    /// Lifts the selected item into a drag gesture. The gesture starts
    /// hovering its own bucket, so an immediate drop is a harmless no-op.
    fn pick_up(&mut self) {
        let bucket = self.focus;
        let Some(idx) = self.selection(bucket).get() else {
            return;
        };

        let Self {
            gesture,
            active,
            finished,
            dragging,
            ..
        } = self;
        let view = match bucket {
            ProjectStatus::Active => active,
            ProjectStatus::Finished => finished,
        };
        {
            let mut items = view.items_mut();
            let Some(item) = items.get_mut(idx) else {
                return;
            };
            *dragging = Some(item.id());
            gesture.begin(bucket, item);
        }
        gesture.enter(bucket, view);
    }

    fn hover_bucket(&mut self, bucket: ProjectStatus) {
        let Self {
            gesture,
            active,
            finished,
            ..
        } = self;

        if gesture.hover() == Some(bucket) {
            // drag-over re-fires while the payload stays over a target
            let view = match bucket {
                ProjectStatus::Active => active,
                ProjectStatus::Finished => finished,
            };
            gesture.enter(bucket, view);
            return;
        }

        if let Some(prev) = gesture.hover() {
            let view = match prev {
                ProjectStatus::Active => &mut *active,
                ProjectStatus::Finished => &mut *finished,
            };
            gesture.leave(view);
        }
        let view = match bucket {
            ProjectStatus::Active => &mut *active,
            ProjectStatus::Finished => &mut *finished,
        };
        gesture.enter(bucket, view);
    }

    fn drop_payload(&mut self) {
        let Some(bucket) = self.gesture.hover() else {
            return;
        };
        {
            let Self {
                gesture,
                active,
                finished,
                ..
            } = self;
            let view = match bucket {
                ProjectStatus::Active => active,
                ProjectStatus::Finished => finished,
            };
            if !gesture.drop_on(view) {
                return;
            }
        }
        self.finish_drag();
        self.focus = bucket;
        self.sync_selections();
    }

    fn cancel_drag(&mut self) {
        {
            let Self {
                gesture,
                active,
                finished,
                ..
            } = self;
            if let Some(bucket) = gesture.hover() {
                let view = match bucket {
                    ProjectStatus::Active => active,
                    ProjectStatus::Finished => finished,
                };
                gesture.leave(view);
            }
        }
        self.finish_drag();
    }

    /// Fires drag-end on the source item. After a drop the broadcast has
    /// already rebuilt both buckets, so the item is looked up by id in its
    /// new home; a vanished item just ends the gesture quietly.
    fn finish_drag(&mut self) {
        let Self {
            gesture,
            active,
            finished,
            dragging,
            ..
        } = self;

        let mut ended = false;
        if let Some(id) = dragging.take() {
            for view in [&mut *active, &mut *finished] {
                let mut items = view.items_mut();
                if let Some(item) = items.iter_mut().find(|item| item.id() == id) {
                    gesture.end(Some(item));
                    ended = true;
                    break;
                }
            }
        }
        if !ended {
            gesture.end(None);
        }
    }

    fn sync_selections(&mut self) {
        let active_len = self.active.len();
        let finished_len = self.finished.len();
        self.active_selection.clamp(active_len);
        self.finished_selection.clamp(finished_len);
    }

    pub async fn run(&mut self) -> BoardResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Resize | Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
