//! Linear undo/redo over whole-document snapshots.
//!
//! Every entry is a complete copy of the document. A cursor points at the
//! current entry; undo and redo move it, and a commit after an undo
//! truncates the redo tail before appending.
//!
//! Live gestures use [`DispatchMode::Replace`], which overwrites the current
//! entry in place, so a drag that runs for hundreds of frames costs one
//! history slot.

use std::collections::VecDeque;

/// How a new state enters the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Append as a new undoable step
    #[default]
    Commit,
    /// Overwrite the current entry without growing the stack
    Replace,
}

/// Snapshot history with a cursor.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: usize,
    max_depth: usize,
}

impl<T: Clone> History<T> {
    /// Start a history whose index 0 is `initial`.
    ///
    /// `max_depth` bounds the number of stored snapshots; the oldest are
    /// dropped first. A depth below 1 is treated as 1.
    pub fn new(initial: T, max_depth: usize) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// The current state.
    pub fn state(&self) -> &T {
        // The deque is never empty and the cursor is always in range.
        &self.entries[self.cursor]
    }

    pub fn dispatch(&mut self, state: T, mode: DispatchMode) {
        match mode {
            DispatchMode::Commit => self.commit(state),
            DispatchMode::Replace => self.replace(state),
        }
    }

    /// Truncate the redo tail and append `state`.
    pub fn commit(&mut self, state: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(state);
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        tracing::trace!(cursor = self.cursor, len = self.entries.len(), "history commit");
    }

    /// Overwrite the entry at the cursor.
    pub fn replace(&mut self, state: T) {
        self.entries[self.cursor] = state;
    }

    /// Step back one entry. Returns false at the start.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, "undo");
        true
    }

    /// Step forward one entry. Returns false at the end.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of stored snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least its initial snapshot, and
    /// neither the depth limit nor `reset` can drop the current one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drop all history and start over from `state`.
    pub fn reset(&mut self, state: T) {
        self.entries.clear();
        self.entries.push_back(state);
        self.cursor = 0;
    }
}
