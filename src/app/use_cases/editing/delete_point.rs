//! Use-Case: Kontrollpunkt löschen.

use crate::app::AppState;

/// Löscht den Kontrollpunkt an `index`.
///
/// Eine bestehende Selektion wird an die verschobenen Indizes angepasst
/// bzw. aufgehoben, wenn der selektierte Punkt selbst gelöscht wird.
pub fn delete_point(state: &mut AppState, index: usize) {
    if index >= state.polygon.len() {
        log::debug!("Löschen ignoriert: Index {} außerhalb", index);
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if let Some(removed) = state.polygon.remove(index) {
        log::info!(
            "Kontrollpunkt {} gelöscht ({:.1}, {:.1})",
            index,
            removed.x,
            removed.y
        );
    }

    match state.selection.selected_index {
        Some(selected) if selected == index => state.selection.clear(),
        Some(selected) if selected > index => {
            state.selection.selected_index = Some(selected - 1);
        }
        _ => {}
    }
}
