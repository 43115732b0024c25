//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und speichert sie nach `path`.
///
/// Ungültige Schrittanzahlen werden abgelehnt, die bisherigen Optionen bleiben aktiv.
pub fn apply_options(
    state: &mut AppState,
    options: EditorOptions,
    path: &Path,
) -> anyhow::Result<()> {
    options.validate()?;
    state.options = options;
    state.options.save_to_file(path)
}

/// Setzt Optionen auf Standardwerte zurück und speichert sie nach `path`.
pub fn reset_options(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(path)
}
