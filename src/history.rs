//! Linear undo history for the editing engine.

use std::collections::VecDeque;

use crate::cursor::Position;

/// Default number of undo steps retained before the oldest is evicted.
pub const DEFAULT_UNDO_CAPACITY: usize = 1000;

/// A single reversible edit step.
///
/// Each variant describes the edit that `undo` must apply to restore the
/// state before the recorded mutation, at the position the mutation
/// happened. Insertions therefore record an [`UndoStep::Delete`], erasures
/// record an [`UndoStep::Insert`], a line split records an
/// [`UndoStep::Join`], and a line join records an [`UndoStep::Split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoStep {
    /// Re-insert a run of characters at `pos` (reverses an erasure).
    Insert { pos: Position, text: String },
    /// Erase `count` characters at `pos` (reverses an insertion).
    Delete { pos: Position, count: usize },
    /// Append the next line onto the line at `pos.row` (reverses a split).
    Join { pos: Position },
    /// Split the line at `pos.row` at `pos.column` (reverses a join).
    Split { pos: Position },
}

impl UndoStep {
    /// The position the step was recorded at.
    pub fn pos(&self) -> Position {
        match self {
            UndoStep::Insert { pos, .. }
            | UndoStep::Delete { pos, .. }
            | UndoStep::Join { pos }
            | UndoStep::Split { pos } => *pos,
        }
    }
}

/// Bounded LIFO history of undo steps.
///
/// One step is recorded per primitive mutation and consumed exactly once
/// when undone. When the capacity is exceeded the oldest step is dropped.
#[derive(Debug, Clone)]
pub struct UndoLog {
    steps: VecDeque<UndoStep>,
    capacity: usize,
}

impl UndoLog {
    /// Create an undo log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    /// Create an undo log retaining at most `capacity` steps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: VecDeque::new(),
            capacity,
        }
    }

    /// Record a step, evicting the oldest if the capacity is exceeded.
    pub fn push(&mut self, step: UndoStep) {
        self.steps.push_back(step);
        while self.steps.len() > self.capacity {
            self.steps.pop_front();
        }
    }

    /// Pop and return the most recent step, or `None` if the log is empty.
    pub fn pop(&mut self) -> Option<UndoStep> {
        self.steps.pop_back()
    }

    /// Discard all recorded steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of steps currently recorded.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}
