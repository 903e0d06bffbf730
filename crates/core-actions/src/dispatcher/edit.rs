//! Text edit action handling (insert/delete).
//!
//! Deletes are built against the buffer at dispatch time, so the captured
//! text is whatever the script's earlier lines left in place.

use super::DispatchResult;
use crate::{Action, DispatchError};
use core_state::{EditCommand, EditorState};

pub(crate) fn handle_edit(
    action: Action,
    state: &mut EditorState,
) -> Result<DispatchResult, DispatchError> {
    let command = match action {
        Action::Insert { position, text } => EditCommand::insert(text, position),
        Action::Delete { position, length } => {
            EditCommand::delete(state.buffer(), position, length)?
        }
        _ => unreachable!("non-edit action routed to edit handler"),
    };
    let kind = command.kind();
    state.apply(command)?;
    tracing::trace!(target: "actions.dispatch", op = kind, len_chars = state.buffer().len_chars(), undo_depth = state.undo_depth(), "edit");
    Ok(DispatchResult::changed())
}
