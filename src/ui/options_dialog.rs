//! Optionen-Dialog für Abtastung, Farben, Größen und Breiten.

use crate::app::{AppIntent, AppState};
use crate::shared::options::MAX_STEP_COUNT;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Kurven ──────────────────────────────────────
                    ui.collapsing("Kurven", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Abtastschritte:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.step_count)
                                        .range(1..=MAX_STEP_COUNT)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Hodograph-Offset X:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.hodograph_offset[0])
                                        .range(-2000.0..=2000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Hodograph-Offset Y:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.hodograph_offset[1])
                                        .range(-2000.0..=2000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                    });

                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaktion", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_radius)
                                        .range(1.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Punkt-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_radius)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.line_width)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben Kurve", |ui| {
                        changed |=
                            color_edit(ui, "Kontrollpolygon:", &mut opts.control_polygon_color);
                        changed |= color_edit(ui, "Kontrollpunkte:", &mut opts.control_point_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.selected_point_color);
                        changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.curve_panel_background);
                    });

                    ui.collapsing("Farben Hodograph", |ui| {
                        changed |=
                            color_edit(ui, "Ableitungspunkte:", &mut opts.derivative_point_color);
                        changed |= color_edit(
                            ui,
                            "Ableitungspolygon:",
                            &mut opts.derivative_polygon_color,
                        );
                        changed |= color_edit(ui, "Hodograph:", &mut opts.hodograph_curve_color);
                        changed |=
                            color_edit(ui, "Hintergrund:", &mut opts.hodograph_panel_background);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::panels::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|channel| channel as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
