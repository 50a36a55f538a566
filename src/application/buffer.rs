//! Single-line text buffer with a caret, used for the node being edited.

/// Default maximum number of characters in a node label.
pub const DEFAULT_CHAR_LIMIT: usize = 256;

/// In-progress text of the focused node.
///
/// The caret is a char index (not a byte offset) in `0..=len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    caret: usize,
    char_limit: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_LIMIT)
    }
}

impl TextBuffer {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            caret: 0,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the content, truncated to the char limit, caret at the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.caret = self.len();
    }

    /// Insert a printable character at the caret.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() || self.len() >= self.char_limit {
            return false;
        }
        let at = self.byte_offset(self.caret);
        self.value.insert(at, c);
        self.caret += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        let at = self.byte_offset(self.caret);
        self.value.remove(at);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.caret);
        self.value.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.caret += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.caret != 0;
        self.caret = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.len();
        let moved = self.caret != end;
        self.caret = end;
        moved
    }

    /// Text before and after the caret.
    pub fn split_at_caret(&self) -> (&str, &str) {
        self.value.split_at(self.byte_offset(self.caret))
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
