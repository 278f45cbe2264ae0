//! Line buffer and cursor mechanics.
//!
//! The document is a vector of lines; the cursor is a (row, column) pair
//! owned by the buffer. The row doubles as the direct index of the current
//! line, so row and line access cannot drift apart. All cursor updates go
//! through [`LineBuffer::cursor_to`], which clamps the column to the target
//! line.
//!
//! Columns are raw character offsets. Lines are stored as `String`s, so
//! character offsets are converted to byte offsets at the edit site.

use crate::cursor::Position;

/// The document: an ordered sequence of lines plus the cursor.
///
/// Invariants: the document always contains at least one line;
/// `cursor.row < line_count()` and `cursor.column <= line length` hold
/// after every method returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: Position,
}

impl LineBuffer {
    /// Create a buffer holding a single empty line, cursor at the origin.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::zero(),
        }
    }

    /// Create a buffer from text, splitting on `\n`. Empty text yields a
    /// single empty line.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_lines(text.split('\n').map(str::to_string).collect());
        buffer
    }

    /// Replace the document content, re-seeding a single empty line if the
    /// given set is empty. Cursor returns to the origin.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.reset_cursor();
    }

    /// Clear the document back to a single empty line, cursor at the origin.
    pub fn reset(&mut self) {
        self.set_lines(Vec::new());
    }

    /// Move the cursor to (0, 0).
    pub fn reset_cursor(&mut self) {
        self.cursor = Position::zero();
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line content at `row`, or `None` past the end of the document.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length of the line at `row` in characters, 0 past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Length of the cursor's line in characters.
    pub fn cur_line_len(&self) -> usize {
        self.line_len(self.cursor.row)
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Full content joined with `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    // =========================================================================
    // Cursor movement
    // =========================================================================

    /// Reposition the cursor. The column is clamped to the target line's
    /// length; the row must be in range (caller-guaranteed).
    pub fn cursor_to(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.lines.len(), "cursor row out of range");
        self.cursor.row = row;
        self.cursor.column = column.min(self.line_len(row));
    }

    // =========================================================================
    // Primitive edits (all relative to the cursor)
    // =========================================================================

    /// Insert a character at the cursor; the column advances past it.
    pub fn insert_at_cursor(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor.row, self.cursor.column);
        self.lines[self.cursor.row].insert(at, ch);
        self.cursor.column += 1;
    }

    /// Remove and return the character at the cursor. The column is
    /// unchanged. The cursor must not be at the end of its line.
    pub fn erase_at_cursor(&mut self) -> char {
        debug_assert!(self.cursor.column < self.cur_line_len());
        let at = self.byte_offset(self.cursor.row, self.cursor.column);
        self.lines[self.cursor.row].remove(at)
    }

    /// Truncate the cursor's line at the column; the suffix becomes a new
    /// line immediately below. Cursor row and column are unchanged (the
    /// column now addresses the end of the truncated line).
    pub fn split_at_cursor(&mut self) {
        let at = self.byte_offset(self.cursor.row, self.cursor.column);
        let suffix = self.lines[self.cursor.row].split_off(at);
        self.lines.insert(self.cursor.row + 1, suffix);
    }

    /// Append the next line's content onto the cursor's line and remove the
    /// next line. The cursor is unchanged. A next line must exist.
    pub fn join_at_cursor(&mut self) {
        debug_assert!(self.cursor.row + 1 < self.lines.len());
        let next = self.lines.remove(self.cursor.row + 1);
        self.lines[self.cursor.row].push_str(&next);
    }

    /// Convert a character column on `row` to a byte offset.
    fn byte_offset(&self, row: usize, column: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
