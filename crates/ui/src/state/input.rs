use unicode_width::UnicodeWidthStr;

/// State for the input composer
///
/// `cursor` is a byte offset into `buffer` and always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current input buffer, may span several lines
    pub buffer: String,
    /// Cursor position
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.buffer[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn take(&mut self) -> String {
        let buffer = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        buffer
    }

    /// Replace the whole buffer, cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True when the buffer holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.split('\n').count()
    }

    /// Cursor as (line, display column)
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (row, before[line_start..].width())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state() {
        let mut input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);

        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.buffer, "hi");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.buffer, "h");
        assert_eq!(input.cursor, 1);

        let taken = input.take();
        assert_eq!(taken, "h");
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_input_state_navigation() {
        let mut input = InputState::new();
        input.set_text("abc");

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 1);

        input.insert_char('X');
        assert_eq!(input.buffer, "aXbc");

        input.delete();
        assert_eq!(input.buffer, "aXc");

        input.move_home();
        assert_eq!(input.cursor, 0);
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.move_end();
        assert_eq!(input.cursor, 3);
        input.move_right();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_input_state_multibyte() {
        let mut input = InputState::new();
        input.insert_char('س');
        input.insert_char('ل');
        input.insert_char('ا');
        input.insert_char('م');
        assert_eq!(input.buffer, "سلام");

        input.move_left();
        input.backspace();
        assert_eq!(input.buffer, "سلم");

        input.move_right();
        assert_eq!(input.cursor, input.buffer.len());
    }

    #[test]
    fn test_input_state_newlines() {
        let mut input = InputState::new();
        input.set_text("first");
        input.insert_newline();
        input.insert_char('2');
        assert_eq!(input.buffer, "first\n2");
        assert_eq!(input.line_count(), 2);
        assert_eq!(input.cursor_position(), (1, 1));

        input.move_home();
        assert_eq!(input.cursor, 6);
        input.move_left();
        input.move_home();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_input_state_blank() {
        let mut input = InputState::new();
        assert!(input.is_blank());
        input.set_text("  \n\t ");
        assert!(input.is_blank());
        assert!(!input.is_empty());
        input.set_text(" a ");
        assert!(!input.is_blank());
    }

    #[test]
    fn test_cursor_position_uses_display_width() {
        let mut input = InputState::new();
        input.set_text("日本");
        assert_eq!(input.cursor_position(), (0, 4));
    }
}
