//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use scrawl::{LineEditor, TextEditor};

/// Create a test editor with given text and cursor position
pub fn test_editor(text: &str, row: usize, column: usize) -> LineEditor {
    let mut editor = LineEditor::from_text(text);
    editor.set_cursor(row, column);
    editor
}

/// Full document content joined with newlines
pub fn buffer_to_string(editor: &LineEditor) -> String {
    editor.buffer().content()
}

/// All document lines in order
pub fn all_lines(editor: &LineEditor) -> Vec<String> {
    let mut out = Vec::new();
    editor.lines(0, editor.buffer().line_count(), &mut out);
    out
}
