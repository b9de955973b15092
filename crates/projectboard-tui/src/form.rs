use crossterm::event::KeyCode;
use projectboard_core::InputState;
use projectboard_domain::{DraftRules, ProjectDraft, SharedStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::People => "People",
        }
    }
}

pub enum FormAction {
    None,
    Cancel,
    Submitted,
}

/// The popup form that produces new projects. All validation happens here;
/// the store only ever sees data that already passed the draft rules.
pub struct ProjectForm {
    pub title: InputState,
    pub description: InputState,
    pub people: InputState,
    field: FormField,
    error: Option<String>,
    rules: DraftRules,
}

impl ProjectForm {
    pub fn new(rules: DraftRules) -> Self {
        Self {
            title: InputState::new(),
            description: InputState::new(),
            people: InputState::new(),
            field: FormField::Title,
            error: None,
            rules,
        }
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn rules(&self) -> &DraftRules {
        &self.rules
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.field = FormField::Title;
        self.error = None;
    }

    pub fn handle_key(&mut self, key_code: KeyCode, store: &SharedStore) -> FormAction {
        match key_code {
            KeyCode::Esc => {
                self.clear();
                FormAction::Cancel
            }
            KeyCode::Enter => {
                if self.submit(store) {
                    FormAction::Submitted
                } else {
                    FormAction::None
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.field = self.field.next();
                FormAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.field = self.field.prev();
                FormAction::None
            }
            KeyCode::Char(c) => {
                // the people field only ever holds an integer
                if self.field != FormField::People || c.is_ascii_digit() {
                    self.focused_input().insert_char(c);
                }
                FormAction::None
            }
            KeyCode::Backspace => {
                self.focused_input().backspace();
                FormAction::None
            }
            KeyCode::Delete => {
                self.focused_input().delete();
                FormAction::None
            }
            KeyCode::Left => {
                self.focused_input().move_left();
                FormAction::None
            }
            KeyCode::Right => {
                self.focused_input().move_right();
                FormAction::None
            }
            KeyCode::Home => {
                self.focused_input().move_home();
                FormAction::None
            }
            KeyCode::End => {
                self.focused_input().move_end();
                FormAction::None
            }
            _ => FormAction::None,
        }
    }

    /// Validates the three fields and, when they pass, hands the draft to
    /// the store. Keeps the form open with an error message otherwise.
    pub fn submit(&mut self, store: &SharedStore) -> bool {
        let people = match self.people.as_str().trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                self.error = Some("People must be a number".to_string());
                return false;
            }
        };

        let draft = ProjectDraft {
            title: self.title.as_str().trim().to_string(),
            description: self.description.as_str().trim().to_string(),
            people,
        };

        if let Err(err) = draft.validate(&self.rules) {
            self.error = Some(err.to_string());
            return false;
        }

        store
            .borrow_mut()
            .create(draft.title, draft.description, draft.people);
        self.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectboard_domain::ProjectStore;

    fn type_text(form: &mut ProjectForm, store: &SharedStore, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyCode::Char(c), store);
        }
    }

    fn filled_form(store: &SharedStore) -> ProjectForm {
        let mut form = ProjectForm::new(DraftRules::default());
        type_text(&mut form, store, "Write spec");
        form.handle_key(KeyCode::Tab, store);
        type_text(&mut form, store, "Draft the design doc");
        form.handle_key(KeyCode::Tab, store);
        type_text(&mut form, store, "2");
        form
    }

    #[test]
    fn test_tab_cycles_fields() {
        let store = ProjectStore::shared();
        let mut form = ProjectForm::new(DraftRules::default());
        assert_eq!(form.field(), FormField::Title);
        form.handle_key(KeyCode::Tab, &store);
        assert_eq!(form.field(), FormField::Description);
        form.handle_key(KeyCode::Tab, &store);
        assert_eq!(form.field(), FormField::People);
        form.handle_key(KeyCode::Tab, &store);
        assert_eq!(form.field(), FormField::Title);
        form.handle_key(KeyCode::BackTab, &store);
        assert_eq!(form.field(), FormField::People);
    }

    #[test]
    fn test_people_field_ignores_non_digits() {
        let store = ProjectStore::shared();
        let mut form = ProjectForm::new(DraftRules::default());
        form.handle_key(KeyCode::Tab, &store);
        form.handle_key(KeyCode::Tab, &store);
        type_text(&mut form, &store, "a2b");
        assert_eq!(form.people.as_str(), "2");
    }

    #[test]
    fn test_valid_submission_creates_project_and_resets() {
        let store = ProjectStore::shared();
        let mut form = filled_form(&store);

        assert!(matches!(
            form.handle_key(KeyCode::Enter, &store),
            FormAction::Submitted
        ));
        let snapshot = store.borrow().snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "Write spec");
        assert_eq!(snapshot[0].people, 2);
        assert!(form.title.is_empty());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_empty_title_keeps_form_open() {
        let store = ProjectStore::shared();
        let mut form = ProjectForm::new(DraftRules::default());
        form.handle_key(KeyCode::Tab, &store);
        type_text(&mut form, &store, "Draft the design doc");
        form.handle_key(KeyCode::Tab, &store);
        type_text(&mut form, &store, "2");

        assert!(matches!(
            form.handle_key(KeyCode::Enter, &store),
            FormAction::None
        ));
        assert!(store.borrow().is_empty());
        assert_eq!(form.error(), Some("Title must not be empty"));
    }

    #[test]
    fn test_missing_people_is_not_a_number() {
        let store = ProjectStore::shared();
        let mut form = ProjectForm::new(DraftRules::default());
        type_text(&mut form, &store, "Write spec");
        form.handle_key(KeyCode::Tab, &store);
        type_text(&mut form, &store, "Draft the design doc");

        form.handle_key(KeyCode::Enter, &store);
        assert!(store.borrow().is_empty());
        assert_eq!(form.error(), Some("People must be a number"));
    }

    #[test]
    fn test_out_of_range_people_is_rejected() {
        let store = ProjectStore::shared();
        let mut form = ProjectForm::new(DraftRules::default());
        type_text(&mut form, &store, "Write spec");
        form.handle_key(KeyCode::Tab, &store);
        type_text(&mut form, &store, "Draft the design doc");
        form.handle_key(KeyCode::Tab, &store);
        type_text(&mut form, &store, "9");

        form.handle_key(KeyCode::Enter, &store);
        assert!(store.borrow().is_empty());
        assert_eq!(form.error(), Some("People must be between 1 and 5"));
    }

    #[test]
    fn test_escape_cancels_and_clears() {
        let store = ProjectStore::shared();
        let mut form = filled_form(&store);

        assert!(matches!(
            form.handle_key(KeyCode::Esc, &store),
            FormAction::Cancel
        ));
        assert!(store.borrow().is_empty());
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert!(form.people.is_empty());
        assert_eq!(form.field(), FormField::Title);
    }
}
