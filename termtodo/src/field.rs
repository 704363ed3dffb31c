//! Single-line text field with a character cursor.

use unicode_width::UnicodeWidthChar;

/// Editable text with a cursor measured in characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Creates an empty field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }

    /// Creates a field pre-filled with `value`, cursor at the end.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position (character index).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Empties the field and returns what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// The value with a block cursor drawn at the cursor position.
    #[must_use]
    pub fn with_cursor_glyph(&self) -> String {
        let mut display = self.value.clone();
        display.insert(self.byte_index(self.cursor), '█');
        display
    }

    /// The value with its cursor glyph, cut to fit `max_width` columns.
    ///
    /// Shows the start of the text while the cursor fits there; otherwise the
    /// window ends at the cursor.
    #[must_use]
    pub fn window(&self, max_width: usize) -> String {
        let display: Vec<(char, usize)> = self
            .with_cursor_glyph()
            .chars()
            .map(|c| (c, c.width().unwrap_or(0)))
            .collect();
        let total: usize = display.iter().map(|&(_, w)| w).sum();
        if total <= max_width {
            return display.into_iter().map(|(c, _)| c).collect();
        }

        let to_cursor: usize = display[..=self.cursor].iter().map(|&(_, w)| w).sum();
        let start = if to_cursor <= max_width {
            0
        } else {
            let mut used = 0;
            let mut start = self.cursor + 1;
            while start > 0 && used + display[start - 1].1 <= max_width {
                start -= 1;
                used += display[start].1;
            }
            start
        };

        let mut used = 0;
        display[start..]
            .iter()
            .take_while(|&&(_, w)| {
                used += w;
                used <= max_width
            })
            .map(|&(c, _)| c)
            .collect()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
