//! Editing session: one buffer, its command history, and snapshot helpers.
//!
//! `EditorState` is the explicit session object callers construct (tests, the
//! script dispatcher, the binary). It owns exactly one `Buffer` and the
//! `History` recording commands applied to it, so every recorded command is
//! guaranteed to target that buffer.
//!
//! Snapshots vs. undo:
//! - `undo_last` reverses one command at a time.
//! - `restore` jumps back to a captured snapshot in one step, regardless of how
//!   many edits happened since. Because recorded commands were captured against
//!   content that no longer exists, restoring clears the history.

use core_text::{Buffer, EditError, Snapshot};
use tracing::debug;

pub mod command;
pub mod undo;

pub use command::{DeleteText, EditCommand, InsertText};
pub use undo::History;

#[derive(Debug, Default)]
pub struct EditorState {
    buffer: Buffer,
    history: History,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self::with_history(buffer, History::new())
    }

    pub fn with_history(buffer: Buffer, history: History) -> Self {
        Self { buffer, history }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current buffer text.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }

    /// Apply `command` to the owned buffer and record it.
    pub fn apply(&mut self, command: EditCommand) -> Result<(), EditError> {
        self.history.apply(command, &mut self.buffer)
    }

    pub fn insert(&mut self, text: impl Into<String>, position: usize) -> Result<(), EditError> {
        self.apply(EditCommand::insert(text, position))
    }

    /// Capture `[position, position + length)` from the current content, then apply the delete.
    pub fn delete(&mut self, position: usize, length: usize) -> Result<(), EditError> {
        let command = EditCommand::delete(&self.buffer, position, length)?;
        self.apply(command)
    }

    /// Revert the most recent command; `Ok(false)` when the history is empty.
    pub fn undo_last(&mut self) -> Result<bool, EditError> {
        self.history.undo_last(&mut self.buffer)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.buffer.snapshot()
    }

    /// Restore a snapshot and drop the now-stale history.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        let discarded = self.history.depth();
        self.buffer.restore(snapshot);
        self.history.clear();
        debug!(target: "state", buffer = %self.buffer.name, discarded, "snapshot_restored");
    }
}
