//! Use-Case: Alle Kontrollpunkte entfernen.

use crate::app::AppState;

/// Entfernt alle Kontrollpunkte (no-op bei leerem Polygon).
pub fn clear_points(state: &mut AppState) {
    if state.polygon.is_empty() {
        return;
    }

    state.record_undo_snapshot();
    let count = state.polygon.len();
    state.polygon.clear();
    state.selection.clear();
    log::info!("{} Kontrollpunkte entfernt", count);
}
