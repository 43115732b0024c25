//! Use-Case: Selektierten Kontrollpunkt verschieben (Drag).

use crate::app::AppState;
use glam::Vec2;

/// Setzt den selektierten Kontrollpunkt auf `pos`.
///
/// Der erste Move eines Drags legt einen Undo-Snapshot an, damit ein
/// kompletter Drag in einem Schritt rückgängig gemacht wird.
pub fn move_selected_point(state: &mut AppState, pos: Vec2) {
    let Some(index) = state.selection.selected_index else {
        log::debug!("Move ignoriert: kein Kontrollpunkt selektiert");
        return;
    };

    if index >= state.polygon.len() {
        log::warn!("Selektierter Index {} existiert nicht mehr", index);
        state.selection.clear();
        return;
    }

    if !state.selection.drag_snapshot_recorded {
        state.record_undo_snapshot();
        state.selection.drag_snapshot_recorded = true;
    }

    state.polygon.replace(index, pos);
}
