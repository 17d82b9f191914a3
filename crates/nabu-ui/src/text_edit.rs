use crate::input::EditKey;

/// Single-line text editing state (cursor and selection anchor).
///
/// Kept per text field across frames so typed input lands at the cursor.
/// All offsets are byte offsets on UTF-8 char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditState {
    pub text: String,
    /// Byte offset of the cursor (caret).
    pub cursor: usize,
    /// Byte offset of the selection anchor. `cursor == anchor` means no selection.
    pub anchor: usize,
}

impl TextEditState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self { text, cursor: end, anchor: end }
    }

    /// Returns `(lo, hi)` sorted byte range of the selection.
    #[inline]
    pub fn sel_range(&self) -> (usize, usize) {
        (self.cursor.min(self.anchor), self.cursor.max(self.anchor))
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    // ── cursor movement ───────────────────────────────────────────────────

    /// Move one character to the left, collapsing any selection to its left edge.
    pub fn move_left(&mut self) {
        if self.has_selection() {
            self.cursor = self.sel_range().0;
        } else {
            self.cursor = prev_char(&self.text, self.cursor);
        }
        self.anchor = self.cursor;
    }

    /// Move one character to the right, collapsing any selection to its right edge.
    pub fn move_right(&mut self) {
        if self.has_selection() {
            self.cursor = self.sel_range().1;
        } else {
            self.cursor = next_char(&self.text, self.cursor);
        }
        self.anchor = self.cursor;
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
        self.anchor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
        self.anchor = self.cursor;
    }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.text.len();
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Insert `s` at the cursor, replacing the selection if any.
    pub fn insert_str(&mut self, s: &str) {
        self.delete_selection();
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.anchor = self.cursor;
    }

    /// Delete one character backward. Deletes the selection if any.
    pub fn delete_backward(&mut self) {
        if self.delete_selection() || self.cursor == 0 {
            return;
        }
        let prev = prev_char(&self.text, self.cursor);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        self.anchor = prev;
    }

    /// Delete one character forward. Deletes the selection if any.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() || self.cursor >= self.text.len() {
            return;
        }
        let next = next_char(&self.text, self.cursor);
        self.text.drain(self.cursor..next);
    }

    /// Applies an editing key. Returns whether the text changed.
    pub fn on_key(&mut self, key: EditKey) -> bool {
        let before = self.text.len();
        match key {
            EditKey::Backspace => self.delete_backward(),
            EditKey::Delete => self.delete_forward(),
            EditKey::Left => self.move_left(),
            EditKey::Right => self.move_right(),
            EditKey::Home => self.move_home(),
            EditKey::End => self.move_end(),
            EditKey::SelectAll => self.select_all(),
        }
        self.text.len() != before
    }

    /// Delete selection; returns true if anything was deleted.
    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (lo, hi) = self.sel_range();
        self.text.drain(lo..hi);
        self.cursor = lo;
        self.anchor = lo;
        true
    }
}

// ── UTF-8 helpers ─────────────────────────────────────────────────────────

/// Step one codepoint boundary backward from `from`.
fn prev_char(s: &str, from: usize) -> usize {
    if from == 0 {
        return 0;
    }
    let mut i = from - 1;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Step one codepoint boundary forward from `from`.
fn next_char(s: &str, from: usize) -> usize {
    if from >= s.len() {
        return s.len();
    }
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
