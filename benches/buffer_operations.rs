//! Benchmarks for line buffer and editor operations
//!
//! Run with: cargo bench buffer_operations

use scrawl::{LineEditor, Movement, TextEditor};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn editor_with_lines(n: usize) -> LineEditor {
    LineEditor::from_text(&"foo bar baz\n".repeat(n))
}

// ============================================================================
// Insert operations
// ============================================================================

#[divan::bench]
fn insert_middle_10k_lines() {
    let mut editor = editor_with_lines(10_000);
    editor.set_cursor(5_000, 5);
    editor.insert(divan::black_box('x'));
}

#[divan::bench]
fn insert_line_of_text() {
    let mut editor = LineEditor::new();
    for ch in "the quick brown fox jumps over the lazy dog".chars() {
        editor.insert(divan::black_box(ch));
    }
}

#[divan::bench]
fn enter_split_middle_10k_lines() {
    let mut editor = editor_with_lines(10_000);
    editor.set_cursor(5_000, 5);
    editor.enter();
}

// ============================================================================
// Delete operations
// ============================================================================

#[divan::bench]
fn del_middle_10k_lines() {
    let mut editor = editor_with_lines(10_000);
    editor.set_cursor(5_000, 5);
    editor.del();
}

#[divan::bench]
fn backspace_join_middle_10k_lines() {
    let mut editor = editor_with_lines(10_000);
    editor.set_cursor(5_000, 0);
    editor.backspace();
}

// ============================================================================
// Navigation operations
// ============================================================================

#[divan::bench(args = [100, 1000, 9999])]
fn set_cursor_to_row(row: usize) {
    let mut editor = editor_with_lines(10_000);
    editor.set_cursor(divan::black_box(row), 0);
}

#[divan::bench(args = [100, 1000, 10000])]
fn walk_right_across_lines(n: usize) {
    let mut editor = editor_with_lines(100);
    for _ in 0..n {
        editor.move_cursor(divan::black_box(Movement::Right));
    }
}

// ============================================================================
// Window copies and undo replay
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn window_copy(rows: usize) {
    let editor = editor_with_lines(10_000);
    let mut out = Vec::new();
    editor.lines(5_000, divan::black_box(rows), &mut out);
    divan::black_box(out);
}

#[divan::bench]
fn undo_100_inserts() {
    let mut editor = LineEditor::new();
    for ch in "x".repeat(100).chars() {
        editor.insert(ch);
    }
    for _ in 0..100 {
        editor.undo();
    }
}
