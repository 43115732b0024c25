//! Application State: zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::ControlPolygon;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Index des aktuell gezogenen Kontrollpunkts
    pub selected_index: Option<usize>,
    /// Ob für den laufenden Drag bereits ein Undo-Snapshot erstellt wurde
    pub drag_snapshot_recorded: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Selektion auf und beendet einen laufenden Drag.
    pub fn clear(&mut self) {
        self.selected_index = None;
        self.drag_snapshot_recorded = false;
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte der Bézier-Kurve
    pub polygon: ControlPolygon,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Abtastung)
    pub options: EditorOptions,
    /// Ziel-Datei für gespeicherte Optionen
    pub options_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            polygon: ControlPolygon::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            options_path: EditorOptions::config_path(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.polygon.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
