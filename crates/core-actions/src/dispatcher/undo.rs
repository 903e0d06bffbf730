//! Undo dispatch. There is no redo: an undone command is discarded.

use super::DispatchResult;
use crate::DispatchError;
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState) -> Result<DispatchResult, DispatchError> {
    let reverted = state.undo_last()?;
    tracing::trace!(target: "actions.dispatch", op = "undo", reverted, undo_depth = state.undo_depth(), "undo");
    if reverted {
        Ok(DispatchResult::changed())
    } else {
        Ok(DispatchResult::clean())
    }
}
