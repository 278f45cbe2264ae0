//! Editor operations: navigation, mutation with undo recording, replay,
//! and line-based file load/save.
//!
//! [`TextEditor`] is the capability seam; [`LineEditor`] is the one shipped
//! implementation. Every mutating operation edits the [`LineBuffer`] and
//! records the inverse step in the [`UndoLog`], except when replaying an
//! undo (replay never records).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::buffer::LineBuffer;
use crate::config::EditorConfig;
use crate::history::{UndoLog, UndoStep};

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Move one line up
    Up,
    /// Move one line down
    Down,
    /// Move one character left (wraps to the previous line end)
    Left,
    /// Move one character right (wraps to the next line start)
    Right,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
}

/// The editing capabilities exposed by the engine.
///
/// Movement at document boundaries, undo on an empty history, and delete at
/// the end of the document are silent no-ops: editing commands never fail
/// visibly. The only fallible surfaces are file I/O ([`TextEditor::load`],
/// [`TextEditor::save`]) and the windowed line copy
/// ([`TextEditor::lines`]).
pub trait TextEditor {
    /// Replace the document with the contents of the file at `path`.
    ///
    /// On open or read failure nothing is mutated. On success the undo
    /// history is cleared, trailing `\r`/`\n` are stripped from every line,
    /// an empty file yields a single empty line, and the cursor returns to
    /// the origin.
    fn load(&mut self, path: &Path) -> io::Result<()>;

    /// Write every line followed by `\n` to the file at `path`.
    ///
    /// Editor state is not mutated, even on failure.
    fn save(&self, path: &Path) -> io::Result<()>;

    /// Clear the document to a single empty line and discard all history.
    fn reset(&mut self);

    /// Insert a character at the cursor; the cursor advances past it.
    ///
    /// A tab expands to literal spaces (one per tab-stop column), each
    /// inserted and recorded individually so each is independently
    /// undoable.
    fn insert(&mut self, ch: char);

    /// Split the current line at the cursor; the cursor moves to the start
    /// of the new line below.
    fn enter(&mut self);

    /// Erase the character at the cursor, or join with the next line when
    /// the cursor is at the end of a line. No-op at the end of the
    /// document.
    fn del(&mut self);

    /// Erase the character before the cursor, or join with the previous
    /// line when the cursor is at column 0. No-op at the start of the
    /// document.
    fn backspace(&mut self);

    /// Move the cursor one step. Silent no-op at document boundaries.
    fn move_cursor(&mut self, movement: Movement);

    /// Absolute cursor reposition. The column is clamped to the target
    /// line's length; `row` must be less than the line count
    /// (caller-guaranteed).
    fn set_cursor(&mut self, row: usize, column: usize);

    /// Current cursor position as (row, column). Pure read.
    fn pos(&self) -> (usize, usize);

    /// Copy up to `num_rows` lines starting at `start_row` into `out`,
    /// without disturbing the cursor.
    ///
    /// Returns the number of lines copied, or `None` when `start_row` is
    /// past the end of the document. `start_row` equal to the line count is
    /// legal and copies zero lines.
    fn lines(&self, start_row: usize, num_rows: usize, out: &mut Vec<String>) -> Option<usize>;

    /// Reverse the most recent edit. No-op when the history is empty.
    fn undo(&mut self);
}

/// The shipped [`TextEditor`] implementation: a [`LineBuffer`] document
/// plus a bounded [`UndoLog`].
#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: LineBuffer,
    history: UndoLog,
    tab_stop: usize,
}

impl LineEditor {
    /// Create an editor with a single empty line and default settings.
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    /// Create an editor configured with the given settings.
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            buffer: LineBuffer::new(),
            history: UndoLog::with_capacity(config.undo_capacity),
            tab_stop: config.tab_stop,
        }
    }

    /// Create an editor seeded with text, cursor at the origin.
    pub fn from_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.buffer = LineBuffer::from_text(text);
        editor
    }

    /// Read-only view of the document.
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Read-only view of the undo history.
    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    /// Insert one character and record its reversal at the pre-insert
    /// position.
    fn insert_recorded(&mut self, ch: char) {
        let pos = self.buffer.cursor();
        self.history.push(UndoStep::Delete { pos, count: 1 });
        self.buffer.insert_at_cursor(ch);
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor for LineEditor {
    fn load(&mut self, path: &Path) -> io::Result<()> {
        let file = File::open(path)?;
        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            lines.push(line.trim_end_matches('\r').to_string());
        }

        let count = lines.len();
        self.buffer.set_lines(lines);
        self.history.clear();
        tracing::debug!("Loaded {} lines from {}", count, path.display());
        Ok(())
    }

    fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in self.buffer.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        tracing::debug!(
            "Saved {} lines to {}",
            self.buffer.line_count(),
            path.display()
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.buffer.reset();
        self.history.clear();
        tracing::debug!("Editor reset");
    }

    fn insert(&mut self, ch: char) {
        if ch == '\t' {
            for _ in 0..self.tab_stop {
                self.insert_recorded(' ');
            }
        } else {
            self.insert_recorded(ch);
        }
    }

    fn enter(&mut self) {
        let pos = self.buffer.cursor();
        self.history.push(UndoStep::Join { pos });
        self.buffer.split_at_cursor();
        self.buffer.cursor_to(pos.row + 1, 0);
    }

    fn del(&mut self) {
        let pos = self.buffer.cursor();
        if pos.column < self.buffer.cur_line_len() {
            let erased = self.buffer.erase_at_cursor();
            self.history.push(UndoStep::Insert {
                pos,
                text: erased.to_string(),
            });
        } else if pos.row + 1 < self.buffer.line_count() {
            self.buffer.join_at_cursor();
            self.history.push(UndoStep::Split { pos });
        }
    }

    fn backspace(&mut self) {
        let pos = self.buffer.cursor();
        if pos.column > 0 {
            self.buffer.cursor_to(pos.row, pos.column - 1);
            let at = self.buffer.cursor();
            let erased = self.buffer.erase_at_cursor();
            self.history.push(UndoStep::Insert {
                pos: at,
                text: erased.to_string(),
            });
        } else if pos.row > 0 {
            self.buffer
                .cursor_to(pos.row - 1, self.buffer.line_len(pos.row - 1));
            let at = self.buffer.cursor();
            self.buffer.join_at_cursor();
            self.history.push(UndoStep::Split { pos: at });
        }
    }

    fn move_cursor(&mut self, movement: Movement) {
        let pos = self.buffer.cursor();
        match movement {
            Movement::Up => {
                if pos.row > 0 {
                    self.buffer.cursor_to(pos.row - 1, pos.column);
                }
            }
            Movement::Down => {
                if pos.row + 1 < self.buffer.line_count() {
                    self.buffer.cursor_to(pos.row + 1, pos.column);
                }
            }
            Movement::Left => {
                if pos.column > 0 {
                    self.buffer.cursor_to(pos.row, pos.column - 1);
                } else if pos.row > 0 {
                    self.buffer
                        .cursor_to(pos.row - 1, self.buffer.line_len(pos.row - 1));
                }
            }
            Movement::Right => {
                if pos.column < self.buffer.cur_line_len() {
                    self.buffer.cursor_to(pos.row, pos.column + 1);
                } else if pos.row + 1 < self.buffer.line_count() {
                    self.buffer.cursor_to(pos.row + 1, 0);
                }
            }
            Movement::LineStart => self.buffer.cursor_to(pos.row, 0),
            Movement::LineEnd => {
                self.buffer.cursor_to(pos.row, self.buffer.cur_line_len());
            }
        }
    }

    fn set_cursor(&mut self, row: usize, column: usize) {
        self.buffer.cursor_to(row, column);
    }

    fn pos(&self) -> (usize, usize) {
        self.buffer.cursor().into()
    }

    fn lines(&self, start_row: usize, num_rows: usize, out: &mut Vec<String>) -> Option<usize> {
        if start_row > self.buffer.line_count() {
            return None;
        }
        out.clear();
        out.extend(
            self.buffer
                .lines()
                .iter()
                .skip(start_row)
                .take(num_rows)
                .cloned(),
        );
        Some(out.len())
    }

    fn undo(&mut self) {
        let Some(step) = self.history.pop() else {
            return;
        };
        let pos = step.pos();
        self.buffer.cursor_to(pos.row, pos.column);

        match step {
            UndoStep::Insert { text, .. } => {
                for ch in text.chars() {
                    self.buffer.insert_at_cursor(ch);
                }
            }
            UndoStep::Delete { count, .. } => {
                for _ in 0..count {
                    self.buffer.erase_at_cursor();
                }
            }
            UndoStep::Join { .. } => self.buffer.join_at_cursor(),
            UndoStep::Split { .. } => self.buffer.split_at_cursor(),
        }

        // Replay primitives move the column; pin the cursor back to the
        // recorded position.
        self.buffer.cursor_to(pos.row, pos.column);
    }
}
