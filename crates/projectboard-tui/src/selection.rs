/// Cursor over one bucket's rendered items. The list shrinks and grows
/// under it whenever a broadcast rebuilds the bucket, so `clamp` runs after
/// every store mutation.
#[derive(Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Keeps the cursor on a real item after the bucket changed size.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_stay_in_bounds() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
        selection.prev();
        selection.prev();
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_next_on_empty_list_selects_nothing() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selection = SelectionState::new();
        selection.set(Some(4));
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_clamp_selects_first_when_items_appear() {
        let mut selection = SelectionState::new();
        selection.clamp(3);
        assert_eq!(selection.get(), Some(0));
    }
}
