use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt am Ende anhängen
    AddPoint { pos: Vec2 },
    /// Kontrollpunkt für Drag selektieren
    SelectPoint { index: usize },
    /// Selektierten Kontrollpunkt an neue Position setzen
    MoveSelectedPoint { pos: Vec2 },
    /// Selektion aufheben (Drag-Ende)
    ClearSelection,
    /// Kontrollpunkt an Index löschen
    DeletePoint { index: usize },
    /// Alle Kontrollpunkte löschen
    ClearPoints,
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen und speichern
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
}
