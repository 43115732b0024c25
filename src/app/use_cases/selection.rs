//! Use-Case: Kontrollpunkt für Drag selektieren bzw. freigeben.

use crate::app::AppState;

/// Selektiert den Kontrollpunkt an `index` als Drag-Ziel.
pub fn select_point(state: &mut AppState, index: usize) {
    if index >= state.polygon.len() {
        log::debug!("Selektion ignoriert: Index {} außerhalb", index);
        state.selection.clear();
        return;
    }

    state.selection.selected_index = Some(index);
    state.selection.drag_snapshot_recorded = false;
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}
