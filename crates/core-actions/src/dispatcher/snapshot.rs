use super::DispatchResult;
use crate::{Action, DispatchError};
use core_state::EditorState;
use core_text::Snapshot;

pub(crate) fn handle_snapshot(
    action: Action,
    state: &mut EditorState,
    saved: &mut Vec<Snapshot>,
) -> Result<DispatchResult, DispatchError> {
    match action {
        Action::Snapshot => {
            saved.push(state.snapshot());
            tracing::trace!(target: "actions.dispatch", op = "snapshot", saved = saved.len(), "snapshot");
            Ok(DispatchResult::clean())
        }
        Action::Restore => {
            let snapshot = saved.pop().ok_or(DispatchError::NoSnapshot)?;
            state.restore(&snapshot);
            tracing::trace!(target: "actions.dispatch", op = "restore", saved = saved.len(), "restore");
            Ok(DispatchResult::changed())
        }
        _ => unreachable!("non-snapshot action routed to snapshot handler"),
    }
}
