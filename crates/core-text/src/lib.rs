//! Rope-based text buffer with positional edits and snapshots.
//!
//! All positions and lengths are expressed in chars (Unicode scalar values),
//! matching `ropey`'s primary index space. Every mutating operation validates
//! its range before touching the rope, so a rejected call leaves the content
//! exactly as it was.

use ropey::Rope;
use tracing::trace;

pub mod error;

pub use error::{EditError, EditOp};

/// A text buffer backed by a `ropey::Rope`.
#[derive(Clone, Debug)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

/// Immutable copy of a buffer's content, restorable with [`Buffer::restore`].
///
/// Rope clones share structure, so capturing is cheap and later edits to the
/// buffer never leak into the snapshot.
#[derive(Clone, Debug)]
pub struct Snapshot {
    saved: Rope,
}

impl Snapshot {
    /// Captured text as an owned `String`.
    pub fn text(&self) -> String {
        self.saved.to_string()
    }
}

impl Buffer {
    /// Construct an empty buffer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            rope: Rope::new(),
            name: name.into(),
        }
    }

    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Self {
        Self {
            rope: Rope::from_str(content),
            name: name.into(),
        }
    }

    /// Length of the content in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Full content as an owned `String`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Return the text in char range `[position, position + length)`.
    pub fn slice(&self, position: usize, length: usize) -> Result<String, EditError> {
        let end = self.checked_end(EditOp::Slice, position, length)?;
        Ok(self.rope.slice(position..end).to_string())
    }

    /// Insert `text` starting at char `position`, shifting later content right.
    ///
    /// `position == len_chars()` appends.
    pub fn insert_at(&mut self, text: &str, position: usize) -> Result<(), EditError> {
        let len = self.rope.len_chars();
        if position > len {
            return Err(EditError::invalid(
                EditOp::Insert,
                position,
                text.chars().count(),
                len,
            ));
        }
        self.rope.insert(position, text);
        trace!(target: "text.buffer", buffer = %self.name, position, inserted_bytes = text.len(), len_chars = self.rope.len_chars(), "insert_at");
        Ok(())
    }

    /// Remove `length` chars starting at `position`. Returns the removed text.
    ///
    /// Ranges running past the end are rejected rather than clamped.
    pub fn delete_at(&mut self, position: usize, length: usize) -> Result<String, EditError> {
        let end = self.checked_end(EditOp::Delete, position, length)?;
        if position == end {
            return Ok(String::new());
        }
        let removed = self.rope.slice(position..end).to_string();
        self.rope.remove(position..end);
        trace!(target: "text.buffer", buffer = %self.name, position, length, len_chars = self.rope.len_chars(), "delete_at");
        Ok(removed)
    }

    /// Capture the current content.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            saved: self.rope.clone(),
        }
    }

    /// Replace the content wholesale with a previously captured snapshot.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.rope = snapshot.saved.clone();
        trace!(target: "text.buffer", buffer = %self.name, len_chars = self.rope.len_chars(), "restore");
    }

    fn checked_end(&self, op: EditOp, position: usize, length: usize) -> Result<usize, EditError> {
        let len = self.rope.len_chars();
        match position.checked_add(length) {
            Some(end) if end <= len => Ok(end),
            _ => Err(EditError::invalid(op, position, length, len)),
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new("untitled")
    }
}
