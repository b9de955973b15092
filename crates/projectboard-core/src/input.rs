/// Single-line editing state for one text field. The cursor is a char
/// index, not a byte offset; multi-byte input moves it by one per char.
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_at(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.char_count();
    }

    /// Hands the buffer to the caller and resets the field. Used when a
    /// form submits.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_insert_at_end() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        input.insert_char('c');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 3);
    }

    #[test]
    fn test_insert_at_middle() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut input = InputState::new();
        input.set("abc".to_string());
        input.backspace();
        assert_eq!(input.as_str(), "ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = InputState::new();
        input.set("abc".to_string());
        input.delete();
        assert_eq!(input.as_str(), "abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = InputState::new();
        input.insert_char('ä');
        input.insert_char('ö');
        assert_eq!(input.cursor_pos(), 2);
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.as_str(), "äxö");
        input.backspace();
        assert_eq!(input.as_str(), "äö");
        assert_eq!(input.cursor_pos(), 1);
    }

    #[test]
    fn test_take_resets() {
        let mut input = InputState::new();
        input.set("draft title".to_string());
        assert_eq!(input.take(), "draft title");
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_home_end() {
        let mut input = InputState::new();
        input.set("abc".to_string());
        input.move_home();
        assert_eq!(input.cursor_pos(), 0);
        input.move_end();
        assert_eq!(input.cursor_pos(), 3);
        input.move_right();
        assert_eq!(input.cursor_pos(), 3);
    }
}
