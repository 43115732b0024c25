//! Use-Case: Neuen Kontrollpunkt anhängen.

use crate::app::AppState;
use glam::Vec2;

/// Hängt einen Kontrollpunkt an das Ende des Polygons an.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let index = state.polygon.push(pos);
    log::info!(
        "Kontrollpunkt {} hinzugefügt bei ({:.1}, {:.1})",
        index,
        pos.x,
        pos.y
    );
}
