//! Edit script actions: parsing script lines into `Action`s and dispatching
//! them against an `EditorState`.

use core_text::EditError;
use thiserror::Error;

pub mod dispatcher;

pub use dispatcher::command_parser::{ScriptLine, ScriptParser, parse_script};
pub use dispatcher::{DispatchResult, ScriptRunner, dispatch};

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Insert { position: usize, text: String },
    Delete { position: usize, length: usize },
    Undo,
    /// Push a snapshot of the current content onto the runner's stack.
    Snapshot,
    /// Pop the latest snapshot and restore it.
    Restore,
    /// Emit the current text.
    Print,
}

/// Failure while executing a single action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error("restore without a saved snapshot")]
    NoSnapshot,
}

/// Script-level failure tagged with its 1-based line number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: {source}")]
    Dispatch {
        line: usize,
        #[source]
        source: DispatchError,
    },
}

impl ActionError {
    pub fn line(&self) -> usize {
        match self {
            ActionError::Parse { line, .. } | ActionError::Dispatch { line, .. } => *line,
        }
    }
}
