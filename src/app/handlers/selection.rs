//! Handler für die Drag-Selektion von Kontrollpunkten.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Kontrollpunkt.
pub fn select_point(state: &mut AppState, index: usize) {
    use_cases::selection::select_point(state, index);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
