use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind Panel-Koordinaten des Kurven-Panels.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste im Kurven-Panel gedrückt
    PointerPressed { pos: Vec2 },
    /// Maus bewegt, während die primäre Taste gehalten wird
    PointerDragged { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Kontextklick (rechte Maustaste) im Kurven-Panel
    ContextClicked { pos: Vec2 },
    /// Laufenden Punkt-Drag abbrechen (Escape)
    DragCancelRequested,
    /// Alle Kontrollpunkte entfernen
    ClearPointsRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
