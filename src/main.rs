//! Bezier-Hodograph-Editor.
//!
//! Interaktiver Editor für Bézier-Kurven beliebigen Grades mit
//! Live-Anzeige der Ableitungskurve (Hodograph) im Nachbar-Panel.

use bezier_hodograph_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier-Hodograph-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bezier-Hodograph-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Hodograph-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let mut state = AppState::new();
        state.options = EditorOptions::load_from_file(&state.options_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let has_meaningful_events = !events.is_empty();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    let panel_size = columns[0].available_size();
                    let (curve_rect, curve_response) =
                        columns[0].allocate_exact_size(panel_size, egui::Sense::click_and_drag());
                    let (hodograph_rect, _) =
                        columns[1].allocate_exact_size(panel_size, egui::Sense::hover());

                    events.extend(
                        self.input
                            .collect_panel_events(&columns[0], &curve_response),
                    );

                    // Events vor dem Zeichnen anwenden, damit der Frame den neuen Stand zeigt
                    self.process_events(std::mem::take(&mut events));

                    let scene = self.controller.build_render_scene(&self.state);
                    ui::paint_curve_panel(&columns[0], curve_rect, &scene);
                    ui::paint_hodograph_panel(&columns[1], hodograph_rect, &scene);
                });
            });

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.input.is_dragging()
            || self.state.should_exit
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
