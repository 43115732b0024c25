//! Handler für das Bearbeiten des Kontrollpolygons.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Hängt einen neuen Kontrollpunkt an.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    use_cases::editing::add_point(state, pos);
}

/// Verschiebt den selektierten Kontrollpunkt.
pub fn move_selected_point(state: &mut AppState, pos: Vec2) {
    use_cases::editing::move_selected_point(state, pos);
}

/// Löscht den Kontrollpunkt an `index`.
pub fn delete_point(state: &mut AppState, index: usize) {
    use_cases::editing::delete_point(state, index);
}

/// Entfernt alle Kontrollpunkte.
pub fn clear_points(state: &mut AppState) {
    use_cases::editing::clear_points(state);
}
