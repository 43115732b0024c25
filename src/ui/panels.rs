//! Zeichnen der beiden Panels (Kurve und Hodograph) mit dem egui-Painter.
//!
//! Liest ausschließlich die `RenderScene`; Eingaben laufen über `input`.

use super::input::panel_to_screen_pos;
use crate::shared::{EditorOptions, PanelScene, RenderScene};

/// Wandelt eine RGBA-Farbe [0..1] in `Color32` um.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Farbsatz für ein Panel.
struct PanelStyle {
    background: egui::Color32,
    polygon: egui::Stroke,
    curve: egui::Stroke,
    point: egui::Color32,
    selected_point: egui::Color32,
    point_radius: f32,
}

impl PanelStyle {
    fn curve_panel(options: &EditorOptions) -> Self {
        Self {
            background: to_color32(options.curve_panel_background),
            polygon: egui::Stroke::new(options.line_width, to_color32(options.control_polygon_color)),
            curve: egui::Stroke::new(options.line_width, to_color32(options.curve_color)),
            point: to_color32(options.control_point_color),
            selected_point: to_color32(options.selected_point_color),
            point_radius: options.point_radius,
        }
    }

    fn hodograph_panel(options: &EditorOptions) -> Self {
        let point = to_color32(options.derivative_point_color);
        Self {
            background: to_color32(options.hodograph_panel_background),
            polygon: egui::Stroke::new(
                options.line_width,
                to_color32(options.derivative_polygon_color),
            ),
            curve: egui::Stroke::new(options.line_width, to_color32(options.hodograph_curve_color)),
            point,
            selected_point: point,
            point_radius: options.point_radius,
        }
    }
}

/// Zeichnet Kontrollpunkte, Kontrollpolygon und Bézier-Kurve in `rect`.
pub fn paint_curve_panel(ui: &egui::Ui, rect: egui::Rect, scene: &RenderScene) {
    let style = PanelStyle::curve_panel(&scene.options);
    paint_panel(ui, rect, &scene.curve_panel, scene.selected_index, &style);
}

/// Zeichnet Ableitungspunkte, Ableitungspolygon und Hodograph-Kurve in `rect`.
pub fn paint_hodograph_panel(ui: &egui::Ui, rect: egui::Rect, scene: &RenderScene) {
    let style = PanelStyle::hodograph_panel(&scene.options);
    paint_panel(ui, rect, &scene.hodograph_panel, None, &style);
}

fn paint_panel(
    ui: &egui::Ui,
    rect: egui::Rect,
    panel: &PanelScene,
    selected_index: Option<usize>,
    style: &PanelStyle,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, style.background);

    // Reihenfolge: Polygon, Kurve, Punkte obenauf
    if panel.polygon.len() >= 2 {
        let polygon = panel
            .polygon
            .iter()
            .map(|p| panel_to_screen_pos(*p, rect))
            .collect();
        painter.add(egui::Shape::line(polygon, style.polygon));
    }

    if panel.curve.len() >= 2 {
        let curve = panel
            .curve
            .iter()
            .map(|p| panel_to_screen_pos(*p, rect))
            .collect();
        painter.add(egui::Shape::line(curve, style.curve));
    }

    for (index, p) in panel.points.iter().enumerate() {
        let color = if selected_index == Some(index) {
            style.selected_point
        } else {
            style.point
        };
        painter.circle_filled(panel_to_screen_pos(*p, rect), style.point_radius, color);
    }
}
