//! Error type shared by buffer mutation and command construction.

use std::fmt;
use thiserror::Error;

/// Buffer operation that rejected its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert,
    Delete,
    Slice,
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditOp::Insert => "insert",
            EditOp::Delete => "delete",
            EditOp::Slice => "slice",
        };
        f.write_str(name)
    }
}

/// Errors raised by positional buffer operations.
///
/// Positions and lengths are char (Unicode scalar value) counts. A failed
/// operation never mutates the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error(
        "invalid argument: {op} at position {position} with length {length} exceeds buffer length {buffer_len}"
    )]
    InvalidArgument {
        op: EditOp,
        position: usize,
        length: usize,
        buffer_len: usize,
    },
}

impl EditError {
    pub(crate) fn invalid(op: EditOp, position: usize, length: usize, buffer_len: usize) -> Self {
        EditError::InvalidArgument {
            op,
            position,
            length,
            buffer_len,
        }
    }
}
