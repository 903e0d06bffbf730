use core_text::{Buffer, EditError};
use tracing::trace;

use crate::command::EditCommand;

/// Stack of applied commands supporting single-step undo.
///
/// Commands are pushed only after a successful apply and popped by
/// [`History::undo_last`]. There is no redo stack; an undone command is
/// dropped. With a capacity set, the oldest entry is discarded once the stack
/// grows past it.
#[derive(Debug, Default)]
pub struct History {
    applied: Vec<EditCommand>,
    capacity: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History retaining at most `capacity` commands (`None` = unbounded).
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            applied: Vec::new(),
            capacity,
        }
    }

    pub fn depth(&self) -> usize {
        self.applied.len()
    }
    pub fn last(&self) -> Option<&EditCommand> {
        self.applied.last()
    }

    /// Execute `command` against `buffer` and record it.
    pub fn apply(&mut self, command: EditCommand, buffer: &mut Buffer) -> Result<(), EditError> {
        command.apply(buffer)?;
        let kind = command.kind();
        self.applied.push(command);
        trace!(target: "state.undo", kind, undo_depth = self.applied.len(), "push_command");
        if let Some(cap) = self.capacity
            && self.applied.len() > cap
        {
            let _ = self.applied.remove(0);
            trace!(target: "state.undo", capacity = cap, "undo_stack_trimmed");
        }
        Ok(())
    }

    /// Revert the most recent command. Returns `Ok(false)` when nothing was recorded.
    ///
    /// If the revert is rejected the command is put back, leaving both the
    /// stack and the buffer untouched.
    pub fn undo_last(&mut self, buffer: &mut Buffer) -> Result<bool, EditError> {
        let Some(command) = self.applied.pop() else {
            trace!(target: "state.undo", "undo_empty");
            return Ok(false);
        };
        if let Err(err) = command.revert(buffer) {
            trace!(target: "state.undo", kind = command.kind(), %err, "undo_rejected");
            self.applied.push(command);
            return Err(err);
        }
        trace!(target: "state.undo", kind = command.kind(), undo_depth = self.applied.len(), "undo_pop");
        Ok(true)
    }

    /// Forget every recorded command.
    pub fn clear(&mut self) {
        self.applied.clear();
        trace!(target: "state.undo", "history_cleared");
    }
}
