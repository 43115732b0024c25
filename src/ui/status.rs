//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.point_count()));

            ui.separator();

            match state.polygon.degree() {
                Some(degree) => ui.label(format!("Grad: {}", degree)),
                None => ui.label("Grad: -"),
            };

            ui.separator();

            match state.selection.selected_index {
                Some(index) => ui.label(format!("Selektiert: P{}", index)),
                None => ui.label("Selektiert: -"),
            };

            ui.separator();

            ui.label(format!("Schritte: {}", state.options.step_count));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
