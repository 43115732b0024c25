//! Builder für Render-Szenen aus dem AppState.
//!
//! Beide Panels werden pro Frame komplett aus demselben Snapshot des
//! Kontrollpolygons neu berechnet: `points → sample` und
//! `points → derive → sample`. Es gibt keinen Cache, der veralten könnte.

use crate::app::AppState;
use crate::core::HodographBuilder;
use crate::shared::{PanelScene, RenderScene};
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let points = state.polygon.snapshot();
    let evaluator = state.options.curve_evaluator();
    let hodograph = HodographBuilder::new(evaluator);

    let curve_panel = if points.len() >= 2 {
        PanelScene {
            points: points.to_vec(),
            polygon: points.to_vec(),
            curve: evaluator.sample(&points),
        }
    } else {
        PanelScene {
            points: points.to_vec(),
            ..PanelScene::default()
        }
    };

    // Anzeige-Offset erst hier: der Core bleibt im Delta-Raum
    let offset = state.options.hodograph_offset_vec();
    let derivative = translate(&hodograph.derive(&points), offset);
    let hodograph_panel = if derivative.len() >= 2 {
        PanelScene {
            polygon: derivative.clone(),
            points: derivative,
            curve: translate(&hodograph.curve(&points), offset),
        }
    } else {
        PanelScene {
            points: derivative,
            ..PanelScene::default()
        }
    };

    RenderScene {
        curve_panel,
        hodograph_panel,
        selected_index: state.selection.selected_index,
        options: state.options.clone(),
    }
}

fn translate(points: &[Vec2], offset: Vec2) -> Vec<Vec2> {
    points.iter().map(|p| *p + offset).collect()
}
