//! Zentrale Konfiguration für den Bézier-Hodograph-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveEvaluator, DEFAULT_STEP_COUNT};
use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

/// Standard-Abtastschritte pro Kurve.
pub const STEP_COUNT: u32 = DEFAULT_STEP_COUNT;
/// Obergrenze der Abtastschritte (Dialog und Konfigurationsdatei).
pub const MAX_STEP_COUNT: u32 = 1000;
/// Anzeige-Offset des Hodograph-Panels (Panel-Pixel).
pub const HODOGRAPH_OFFSET: [f32; 2] = [300.0, 300.0];

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Panel-Pixeln: Klick näher als dieser Wert trifft einen Kontrollpunkt.
pub const PICK_RADIUS: f32 = 10.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius gezeichneter Punkte in Pixeln.
pub const POINT_RADIUS: f32 = 5.0;
/// Linienstärke für Polygone und Kurven in Pixeln.
pub const LINE_WIDTH: f32 = 2.0;
/// Farbe des Kontrollpolygons (RGBA: Rosa).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [1.0, 0.75, 0.8, 1.0];
/// Farbe der Kontrollpunkte (RGBA: Schwarz).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des selektierten Kontrollpunkts (RGBA: Magenta).
pub const SELECTED_POINT_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der Bézier-Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe der Ableitungspunkte (RGBA: Weiß).
pub const DERIVATIVE_POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des Ableitungspolygons (RGBA: Grün).
pub const DERIVATIVE_POLYGON_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Farbe der Hodograph-Kurve (RGBA: Orange).
pub const HODOGRAPH_CURVE_COLOR: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
/// Hintergrund des Kurven-Panels (RGBA: Hellgrau).
pub const CURVE_PANEL_BACKGROUND: [f32; 4] = [0.93, 0.93, 0.93, 1.0];
/// Hintergrund des Hodograph-Panels (RGBA: Dunkelgrau).
pub const HODOGRAPH_PANEL_BACKGROUND: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_hodograph_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurven ──────────────────────────────────────────────────
    /// Abtastschritte pro Kurve (1 bis `MAX_STEP_COUNT`)
    pub step_count: u32,
    /// Translation des Hodograph-Panels gegenüber dem Delta-Raum
    pub hodograph_offset: [f32; 2],

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte in Pixeln
    pub pick_radius: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius gezeichneter Punkte
    pub point_radius: f32,
    /// Linienstärke für Polygone und Kurven
    pub line_width: f32,
    /// Farbe des Kontrollpolygons
    pub control_polygon_color: [f32; 4],
    /// Farbe der Kontrollpunkte
    pub control_point_color: [f32; 4],
    /// Farbe des selektierten Kontrollpunkts
    pub selected_point_color: [f32; 4],
    /// Farbe der Bézier-Kurve
    pub curve_color: [f32; 4],
    /// Farbe der Ableitungspunkte
    pub derivative_point_color: [f32; 4],
    /// Farbe des Ableitungspolygons
    pub derivative_polygon_color: [f32; 4],
    /// Farbe der Hodograph-Kurve
    pub hodograph_curve_color: [f32; 4],
    /// Hintergrund des Kurven-Panels
    pub curve_panel_background: [f32; 4],
    /// Hintergrund des Hodograph-Panels
    pub hodograph_panel_background: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            step_count: STEP_COUNT,
            hodograph_offset: HODOGRAPH_OFFSET,

            pick_radius: PICK_RADIUS,

            point_radius: POINT_RADIUS,
            line_width: LINE_WIDTH,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            selected_point_color: SELECTED_POINT_COLOR,
            curve_color: CURVE_COLOR,
            derivative_point_color: DERIVATIVE_POINT_COLOR,
            derivative_polygon_color: DERIVATIVE_POLYGON_COLOR,
            hodograph_curve_color: HODOGRAPH_CURVE_COLOR,
            curve_panel_background: CURVE_PANEL_BACKGROUND,
            hodograph_panel_background: HODOGRAPH_PANEL_BACKGROUND,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML und prüft die Schrittanzahl.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Prüft die Schrittanzahl auf den Bereich `1..=MAX_STEP_COUNT`.
    pub fn validate(&self) -> anyhow::Result<()> {
        CurveEvaluator::new(self.step_count)?;
        if self.step_count > MAX_STEP_COUNT {
            anyhow::bail!(
                "Schrittanzahl {} überschreitet das Maximum {}",
                self.step_count,
                MAX_STEP_COUNT
            );
        }
        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_hodograph_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_hodograph_editor.toml")
    }

    /// Evaluator für die konfigurierte Schrittanzahl.
    ///
    /// Fällt bei ungültiger Schrittanzahl mit Warnung auf den Standard zurück.
    pub fn curve_evaluator(&self) -> CurveEvaluator {
        match self.validate() {
            Ok(()) => CurveEvaluator::new(self.step_count).unwrap_or_default(),
            Err(e) => {
                log::warn!("{:#}, verwende {} Schritte", e, DEFAULT_STEP_COUNT);
                CurveEvaluator::default()
            }
        }
    }

    /// Hodograph-Offset als Vektor.
    pub fn hodograph_offset_vec(&self) -> glam::Vec2 {
        glam::Vec2::from(self.hodograph_offset)
    }
}
