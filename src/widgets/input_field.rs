//! Single-line text editing state.
//!
//! Shared by the hero prompt and the contact form fields. Holds content,
//! a char-indexed cursor and a horizontal scroll offset; rendering is
//! done by the screen code, which asks for the visible window at its
//! width.

#[derive(Debug, Clone, Default)]
pub struct InputField {
    /// Edited text.
    content: String,
    /// Cursor position as a char index (not bytes).
    cursor: usize,
    /// First visible char when the content overflows the field.
    scroll_offset: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of char index `i`, for splicing into the String.
    fn byte_index(&self, i: usize) -> usize {
        self.content
            .char_indices()
            .nth(i)
            .map(|(b, _)| b)
            .unwrap_or(self.content.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char under the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the char before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content, cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
        self.scroll_offset = 0;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Clear the field and hand back what was in it (prompt submit).
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.scroll_offset = 0;
        std::mem::take(&mut self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The slice of content that fits in `width` cells with the cursor
    /// kept in view, plus the cursor's column within that slice.
    ///
    /// Scroll state is updated as a side effect so repeated renders are
    /// stable.
    pub fn visible_window(&mut self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        // Keep one cell free so the cursor can sit past the last char.
        if self.cursor >= self.scroll_offset + width {
            self.scroll_offset = self.cursor - width + 1;
        }
        let visible: String = self
            .content
            .chars()
            .skip(self.scroll_offset)
            .take(width)
            .collect();
        (visible, self.cursor - self.scroll_offset)
    }
}
