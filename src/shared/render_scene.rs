//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use glam::Vec2;

/// Zeichengeometrie eines Panels in Panel-Koordinaten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelScene {
    /// Einzeln gezeichnete Punkte
    pub points: Vec<Vec2>,
    /// Polygonzug durch die Punkte (leer unterhalb von zwei Punkten)
    pub polygon: Vec<Vec2>,
    /// Abgetastete Bézier-Kurve (leer unterhalb von zwei Punkten)
    pub curve: Vec<Vec2>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte, Kontrollpolygon und Bézier-Kurve
    pub curve_panel: PanelScene,
    /// Ableitungspunkte, Ableitungspolygon und Hodograph-Kurve (mit Anzeige-Offset)
    pub hodograph_panel: PanelScene,
    /// Index des aktuell gezogenen Kontrollpunkts
    pub selected_index: Option<usize>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        !self.curve_panel.curve.is_empty()
    }
}
