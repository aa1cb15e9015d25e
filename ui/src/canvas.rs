use crate::app::SignalboxApp;
use crate::theme::*;
use eframe::egui;
use signalbox_core::Approach;

const CELL: f32 = 140.0;
const CENTER: f32 = 60.0;
const LIGHT_RADIUS: f32 = 15.0;

impl SignalboxApp {
    /// 3x3 schematic: the junction in the middle, one road per approach
    /// around it, each with its light nearest the junction.
    pub fn render_intersection(&self, ui: &mut egui::Ui) {
        let canvas_rect = ui.max_rect();
        let painter = ui.painter();

        let size = 2.0 * CELL + CENTER;
        let origin = canvas_rect.center() - egui::vec2(size, size) * 0.5;
        let junction = egui::Rect::from_min_size(origin + egui::vec2(CELL, CELL), egui::vec2(CENTER, CENTER));

        painter.text(
            canvas_rect.left_top() + egui::vec2(20.0, 15.0),
            egui::Align2::LEFT_TOP,
            format!("LIVE INTERSECTION VIEW  ·  {}", self.simulation.mode.label().to_uppercase()),
            egui::FontId::proportional(12.0),
            COLOR_TEXT_DIM,
        );

        painter.rect_filled(junction, 2.0, COLOR_JUNCTION);

        for approach in Approach::ALL {
            let road = road_rect(junction, approach);
            painter.rect_filled(road, 5.0, COLOR_ROAD);

            let queue = self.simulation.state.queue(approach);
            painter.text(
                road.center() - egui::vec2(0.0, 10.0),
                egui::Align2::CENTER_CENTER,
                approach.label(),
                egui::FontId::proportional(14.0),
                egui::Color32::WHITE,
            );
            painter.text(
                road.center() + egui::vec2(0.0, 12.0),
                egui::Align2::CENTER_CENTER,
                format!("Cars: {}", queue),
                egui::FontId::proportional(12.0),
                COLOR_TEXT,
            );

            let light = self.simulation.state.light(approach);
            let pos = light_pos(junction, approach);
            painter.circle_filled(pos, LIGHT_RADIUS, light_color(light));
            painter.circle_stroke(pos, LIGHT_RADIUS, egui::Stroke::new(2.0, egui::Color32::BLACK));
        }
    }
}

fn road_rect(junction: egui::Rect, approach: Approach) -> egui::Rect {
    let gap = 5.0;
    let (min, size) = match approach {
        Approach::N => (
            junction.left_top() - egui::vec2(0.0, CELL),
            egui::vec2(CENTER, CELL - gap),
        ),
        Approach::S => (
            junction.left_bottom() + egui::vec2(0.0, gap),
            egui::vec2(CENTER, CELL - gap),
        ),
        Approach::W => (
            junction.left_top() - egui::vec2(CELL, 0.0),
            egui::vec2(CELL - gap, CENTER),
        ),
        Approach::E => (
            junction.right_top() + egui::vec2(gap, 0.0),
            egui::vec2(CELL - gap, CENTER),
        ),
    };
    egui::Rect::from_min_size(min, size)
}

fn light_pos(junction: egui::Rect, approach: Approach) -> egui::Pos2 {
    let offset = LIGHT_RADIUS + 8.0;
    match approach {
        Approach::N => junction.center_top() - egui::vec2(0.0, offset),
        Approach::S => junction.center_bottom() + egui::vec2(0.0, offset),
        Approach::W => junction.left_center() - egui::vec2(offset, 0.0),
        Approach::E => junction.right_center() + egui::vec2(offset, 0.0),
    }
}
