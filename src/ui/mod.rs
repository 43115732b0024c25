//! UI-Layer mit egui.
//!
//! Zeichnen und Eingabe sind getrennt: `panels` liest nur die RenderScene,
//! `input` erzeugt nur AppIntents.

pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod panels;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use panels::{paint_curve_panel, paint_hodograph_panel};
pub use status::render_status_bar;
