//! Panel-Input-Handling: Maus-Events im Kurven-Panel → AppIntent.
//!
//! Bildet die drei Zeiger-Phasen ab: Drücken (Punkt wählen oder anhängen),
//! Bewegen bei gedrückter Taste (Punkt ziehen) und Loslassen. Der Kontextklick
//! löscht den nächstgelegenen Punkt.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Kurven-Panel
#[derive(Default)]
pub struct InputState {
    /// Primäre Taste wurde innerhalb des Panels gedrückt und ist noch unten
    primary_down: bool,
    /// Zuletzt gemeldete Drag-Position (unterdrückt doppelte Move-Intents)
    last_drag_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Zeiger-Drag im Panel läuft.
    pub fn is_dragging(&self) -> bool {
        self.primary_down
    }

    /// Sammelt Pointer- und Tastatur-Events des Kurven-Panels als AppIntents.
    ///
    /// `response` muss mit `Sense::click_and_drag()` für das Kurven-Panel
    /// allokiert sein; alle Positionen werden relativ zu `response.rect` geliefert.
    pub fn collect_panel_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let rect = response.rect;

        events.extend(keyboard::collect_keyboard_intents(ui, self.primary_down));
        if events
            .iter()
            .any(|e| matches!(e, AppIntent::DragCancelRequested))
        {
            self.reset();
        }

        let (pressed, released, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pointer_pos) = latest_pos {
                let pos = screen_pos_to_panel(pointer_pos, rect);
                events.push(AppIntent::PointerPressed { pos });
                self.primary_down = true;
                self.last_drag_pos = Some(pos);
            }
        } else if self.primary_down {
            if let Some(pointer_pos) = latest_pos {
                let pos = screen_pos_to_panel(pointer_pos, rect);
                if self.last_drag_pos != Some(pos) {
                    events.push(AppIntent::PointerDragged { pos });
                    self.last_drag_pos = Some(pos);
                }
            }
        }

        if released && self.primary_down {
            events.push(AppIntent::PointerReleased);
            self.reset();
        }

        if response.secondary_clicked() {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::ContextClicked {
                    pos: screen_pos_to_panel(pointer_pos, rect),
                });
            }
        }

        events
    }

    fn reset(&mut self) {
        self.primary_down = false;
        self.last_drag_pos = None;
    }
}

/// Rechnet eine Bildschirmposition in Panel-Koordinaten (Ursprung oben links) um.
pub fn screen_pos_to_panel(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

/// Rechnet Panel-Koordinaten in eine Bildschirmposition um.
pub fn panel_to_screen_pos(pos: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + pos.x, rect.min.y + pos.y)
}
