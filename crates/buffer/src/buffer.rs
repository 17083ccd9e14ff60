//! Rope-backed text storage with selection-aware editing.

use ropey::Rope;

use crate::Selection;

/// The widget's editable text content.
///
/// Offsets are char indices into the rope. Every operation clamps to the
/// buffer bounds and leaves the selection valid before returning, so the
/// caller never has to re-check it.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    rope: Rope,
    selection: Selection,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at offset 0.
    pub fn from_text(text: &str) -> Self {
        TextBuffer {
            rope: Rope::from_str(text),
            selection: Selection::default(),
        }
    }

    /// Length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Full content as an owned string.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Cursor offset: the moving end of the selection.
    pub fn cursor(&self) -> usize {
        self.selection.active
    }

    /// Place the cursor, collapsing the selection. Clamped to the buffer.
    pub fn set_cursor(&mut self, offset: usize) {
        self.selection = Selection::cursor(offset.min(self.rope.len_chars()));
    }

    /// Set the selection span. Both ends clamp to the buffer.
    pub fn set_selection(&mut self, anchor: usize, active: usize) {
        let len = self.rope.len_chars();
        self.selection = Selection::new(anchor.min(len), active.min(len));
    }

    /// Replace the selection with `text` and collapse the cursor to the end
    /// of the insertion. An empty selection makes this a pure insert.
    pub fn insert(&mut self, text: &str) {
        let start = self.selection.start();
        let end = self.selection.end();
        if start < end {
            self.rope.remove(start..end);
        }
        self.rope.insert(start, text);
        self.selection = Selection::cursor(start + text.chars().count());
    }

    /// Insert one character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0; 4];
        self.insert(ch.encode_utf8(&mut buf));
    }

    /// Delete the selection, or `offset` chars next to the cursor when the
    /// selection is empty (negative for backspace, positive for forward
    /// delete). Clamped at the buffer edges; the cursor lands at the start
    /// of the removed range.
    pub fn delete_relative(&mut self, offset: isize) {
        let (start, end) = if self.selection.is_empty() {
            let cursor = self.selection.start();
            let target = self.clamp_offset(cursor, offset);
            (cursor.min(target), cursor.max(target))
        } else {
            (self.selection.start(), self.selection.end())
        };
        if start < end {
            self.rope.remove(start..end);
        }
        self.selection = Selection::cursor(start);
    }

    /// Move the cursor by `n` chars, collapsing the selection. Clamped at
    /// the buffer edges.
    pub fn move_horizontal(&mut self, n: isize) {
        let target = self.clamp_offset(self.selection.end(), n);
        self.selection = Selection::cursor(target);
    }

    /// Move the cursor to the same column on the previous line, clamped to
    /// that line's length. No-op on the first line.
    pub fn move_line_up(&mut self) {
        let (line, column) = self.line_col(self.selection.end());
        if line == 0 {
            return;
        }
        self.place_at(line - 1, column);
    }

    /// Move the cursor to the same column on the next line, clamped to
    /// that line's length. No-op on the last line.
    pub fn move_line_down(&mut self) {
        let (line, column) = self.line_col(self.selection.end());
        if line + 1 >= self.rope.len_lines() {
            return;
        }
        self.place_at(line + 1, column);
    }

    /// Number of lines, counting the empty line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// One line's content without its newline.
    pub fn line(&self, index: usize) -> Option<String> {
        if index >= self.rope.len_lines() {
            return None;
        }
        let text = self.rope.line(index).to_string();
        Some(text.trim_end_matches('\n').to_string())
    }

    fn place_at(&mut self, line: usize, column: usize) {
        let offset = self.rope.line_to_char(line) + column.min(self.line_len(line));
        self.selection = Selection::cursor(offset);
    }

    /// Line index and column (chars from line start) of a char offset.
    fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.rope.char_to_line(offset);
        (line, offset - self.rope.line_to_char(line))
    }

    /// Line length in chars, excluding the trailing newline.
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        len
    }

    /// Offset moved by a signed delta, clamped to the buffer.
    fn clamp_offset(&self, offset: usize, delta: isize) -> usize {
        let len = self.rope.len_chars() as isize;
        (offset as isize + delta).clamp(0, len) as usize
    }
}
