//! Reversible edit commands.
//!
//! A command does not hold its target buffer; the owner (`History` /
//! `EditorState`) passes the buffer to `apply` and `revert`. The session
//! guarantees every recorded command targets the buffer it was built against.
//!
//! Delete Capture:
//! - `DeleteText` reads the text it will remove when it is *constructed*, not
//!   when it is applied. `apply` then removes `char_len(deleted)` chars at the
//!   stored position regardless of what the live buffer holds there, and
//!   `revert` re-inserts the captured text.

use core_text::{Buffer, EditError};
use tracing::trace;

/// Insert `text` at char `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertText {
    text: String,
    position: usize,
    char_len: usize,
}

impl InsertText {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self {
            text,
            position,
            char_len,
        }
    }

    fn apply(&self, buffer: &mut Buffer) -> Result<(), EditError> {
        buffer.insert_at(&self.text, self.position)
    }

    fn revert(&self, buffer: &mut Buffer) -> Result<(), EditError> {
        buffer.delete_at(self.position, self.char_len).map(drop)
    }
}

/// Delete a char range whose content was captured at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteText {
    position: usize,
    deleted: String,
    char_len: usize,
}

impl DeleteText {
    /// Capture `[position, position + length)` from `buffer` without mutating it.
    pub fn new(buffer: &Buffer, position: usize, length: usize) -> Result<Self, EditError> {
        let deleted = buffer.slice(position, length)?;
        let char_len = deleted.chars().count();
        trace!(target: "state.command", position, char_len, "delete_captured");
        Ok(Self {
            position,
            deleted,
            char_len,
        })
    }

    /// Text captured at construction; what `revert` re-inserts.
    pub fn deleted_text(&self) -> &str {
        &self.deleted
    }

    fn apply(&self, buffer: &mut Buffer) -> Result<(), EditError> {
        buffer.delete_at(self.position, self.char_len).map(drop)
    }

    fn revert(&self, buffer: &mut Buffer) -> Result<(), EditError> {
        buffer.insert_at(&self.deleted, self.position)
    }
}

/// A reversible mutation over a [`Buffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert(InsertText),
    Delete(DeleteText),
}

impl EditCommand {
    pub fn insert(text: impl Into<String>, position: usize) -> Self {
        EditCommand::Insert(InsertText::new(text, position))
    }

    /// Build a delete command, capturing the doomed range from `buffer` now.
    pub fn delete(buffer: &Buffer, position: usize, length: usize) -> Result<Self, EditError> {
        DeleteText::new(buffer, position, length).map(EditCommand::Delete)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EditCommand::Insert(_) => "insert",
            EditCommand::Delete(_) => "delete",
        }
    }

    /// Perform the mutation.
    pub fn apply(&self, buffer: &mut Buffer) -> Result<(), EditError> {
        match self {
            EditCommand::Insert(cmd) => cmd.apply(buffer),
            EditCommand::Delete(cmd) => cmd.apply(buffer),
        }
    }

    /// Perform the exact inverse of [`EditCommand::apply`].
    pub fn revert(&self, buffer: &mut Buffer) -> Result<(), EditError> {
        match self {
            EditCommand::Insert(cmd) => cmd.revert(buffer),
            EditCommand::Delete(cmd) => cmd.revert(buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::EditOp;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_apply_then_revert_round_trips() {
        let mut b = Buffer::from_str("t", "Hello!");
        let cmd = EditCommand::insert(", World", 5);
        cmd.apply(&mut b).unwrap();
        assert_eq!(b.text(), "Hello, World!");
        cmd.revert(&mut b).unwrap();
        assert_eq!(b.text(), "Hello!");
    }

    #[test]
    fn insert_revert_uses_char_length() {
        let mut b = Buffer::from_str("t", "ab");
        let cmd = EditCommand::insert("\u{1F600}\u{e9}", 1);
        cmd.apply(&mut b).unwrap();
        assert_eq!(b.len_chars(), 4);
        cmd.revert(&mut b).unwrap();
        assert_eq!(b.text(), "ab");
    }

    #[test]
    fn empty_insert_is_noop_pair() {
        let mut b = Buffer::from_str("t", "abc");
        let cmd = EditCommand::insert("", 2);
        cmd.apply(&mut b).unwrap();
        assert_eq!(b.text(), "abc");
        cmd.revert(&mut b).unwrap();
        assert_eq!(b.text(), "abc");
    }

    #[test]
    fn delete_captures_at_construction() {
        let b = Buffer::from_str("t", "Hello, World!");
        let cmd = DeleteText::new(&b, 7, 6).unwrap();
        assert_eq!(cmd.deleted_text(), "World!");
        assert_eq!(b.text(), "Hello, World!");
    }

    #[test]
    fn delete_apply_removes_captured_char_count() {
        let mut b = Buffer::from_str("t", "a\u{1F600}\u{e9}bc");
        let cmd = DeleteText::new(&b, 1, 2).unwrap();
        assert_eq!(cmd.deleted_text(), "\u{1F600}\u{e9}");
        assert_eq!(cmd.char_len, cmd.deleted_text().chars().count());
        EditCommand::Delete(cmd.clone()).apply(&mut b).unwrap();
        assert_eq!(b.text(), "abc");
        EditCommand::Delete(cmd).revert(&mut b).unwrap();
        assert_eq!(b.text(), "a\u{1F600}\u{e9}bc");
    }

    #[test]
    fn delete_out_of_range_construction_fails() {
        let b = Buffer::from_str("t", "abc");
        let err = EditCommand::delete(&b, 2, 5).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidArgument {
                op: EditOp::Slice,
                position: 2,
                length: 5,
                buffer_len: 3,
            }
        );
    }

    #[test]
    fn delete_apply_then_revert_round_trips() {
        let mut b = Buffer::from_str("t", "Hello, World!");
        let cmd = EditCommand::delete(&b, 5, 2).unwrap();
        cmd.apply(&mut b).unwrap();
        assert_eq!(b.text(), "HelloWorld!");
        cmd.revert(&mut b).unwrap();
        assert_eq!(b.text(), "Hello, World!");
    }

    #[test]
    fn kind_names_variant() {
        let b = Buffer::from_str("t", "x");
        assert_eq!(EditCommand::insert("a", 0).kind(), "insert");
        assert_eq!(EditCommand::delete(&b, 0, 1).unwrap().kind(), "delete");
    }
}
