//! Dispatcher applying `Action` to an `EditorState`.
//!
//! Sub-modules:
//! * `command_parser` - script text to `Action`
//! * `edit`     - insert/delete through the command history
//! * `undo`     - single-step undo
//! * `snapshot` - snapshot stack push/restore
//!
//! `ScriptRunner` ties parsing and dispatch together for whole scripts.

use crate::{Action, ActionError, DispatchError};
use core_state::EditorState;
use core_text::Snapshot;
use tracing::{debug, trace, warn};

pub mod command_parser;
mod edit;
mod snapshot;
mod undo;

use command_parser::parse_script;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// Buffer content may differ from before the action.
    pub changed: bool,
    /// Text the caller should emit (set by `Print`).
    pub output: Option<String>,
}

impl DispatchResult {
    pub fn changed() -> Self {
        Self {
            changed: true,
            output: None,
        }
    }
    pub fn clean() -> Self {
        Self::default()
    }
    pub fn output(text: String) -> Self {
        Self {
            changed: false,
            output: Some(text),
        }
    }
}

/// Apply one action. `saved` is the snapshot stack used by `Snapshot`/`Restore`.
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    saved: &mut Vec<Snapshot>,
) -> Result<DispatchResult, DispatchError> {
    match action {
        Action::Insert { .. } | Action::Delete { .. } => edit::handle_edit(action, state),
        Action::Undo => undo::handle_undo(state),
        Action::Snapshot | Action::Restore => snapshot::handle_snapshot(action, state, saved),
        Action::Print => Ok(DispatchResult::output(state.text())),
    }
}

/// Runs edit scripts against an owned session.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    state: EditorState,
    saved: Vec<Snapshot>,
}

impl ScriptRunner {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            saved: Vec::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    /// Parse `src` fully, then dispatch each action in order, handing any
    /// `Print` output to `emit`. Returns the number of actions executed.
    ///
    /// Stops at the first failing action; earlier actions stay applied.
    pub fn run<F>(&mut self, src: &str, mut emit: F) -> Result<usize, ActionError>
    where
        F: FnMut(&str),
    {
        let lines = parse_script(src)?;
        debug!(target: "actions.dispatch", actions = lines.len(), "script_parsed");
        let mut executed = 0;
        let mut changed = 0;
        for script_line in lines {
            let line = script_line.line;
            let result = dispatch(script_line.action, &mut self.state, &mut self.saved)
                .map_err(|source| {
                    warn!(target: "actions.dispatch", line, error = %source, "action_failed");
                    ActionError::Dispatch { line, source }
                })?;
            trace!(target: "actions.dispatch", line, changed = result.changed, "action_dispatched");
            if result.changed {
                changed += 1;
            }
            if let Some(text) = result.output.as_deref() {
                emit(text);
            }
            executed += 1;
        }
        debug!(target: "actions.dispatch", executed, changed, "script_finished");
        Ok(executed)
    }
}
