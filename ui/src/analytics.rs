use crate::theme::*;
use eframe::egui;
use signalbox_core::MetricPoint;

/// Small KPI card: a label, the current value and a trend line over the
/// recent ticks.
pub struct KpiCard<'a> {
    label: &'a str,
    data: &'a [MetricPoint],
    field_extractor: Box<dyn Fn(&MetricPoint) -> f32 + 'a>,
    color: egui::Color32,
    value_text: String,
    size: egui::Vec2,
}

impl<'a> KpiCard<'a> {
    pub fn new(
        label: &'a str,
        data: &'a [MetricPoint],
        extractor: impl Fn(&MetricPoint) -> f32 + 'a,
        color: egui::Color32,
        value_text: String,
    ) -> Self {
        Self {
            label,
            data,
            field_extractor: Box::new(extractor),
            color,
            value_text,
            size: egui::vec2(220.0, 56.0),
        }
    }
}

impl egui::Widget for KpiCard<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, egui::Color32::from_black_alpha(40));
        painter.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

        // Top 20 pixels hold the label and value
        let graph_rect =
            egui::Rect::from_min_max(rect.left_top() + egui::vec2(0.0, 20.0), rect.right_bottom());

        if self.data.len() >= 2 {
            let values: Vec<f32> = self.data.iter().map(|p| (self.field_extractor)(p)).collect();
            let max_val = values.iter().copied().fold(0.0, f32::max).max(1.0);
            let step_x = graph_rect.width() / (values.len() - 1) as f32;

            let points: Vec<egui::Pos2> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    egui::pos2(
                        graph_rect.left() + i as f32 * step_x,
                        graph_rect.bottom() - (v / max_val) * (graph_rect.height() * 0.8) - 2.0,
                    )
                })
                .collect();

            if let Some(&last) = points.last() {
                painter.circle_filled(last, 2.5, self.color);
            }
            painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, self.color)));
        } else {
            painter.text(
                graph_rect.center(),
                egui::Align2::CENTER_CENTER,
                "WAITING FOR TICKS",
                egui::FontId::proportional(10.0),
                COLOR_TEXT_DIM,
            );
        }

        painter.text(
            rect.left_top() + egui::vec2(8.0, 4.0),
            egui::Align2::LEFT_TOP,
            self.label,
            egui::FontId::proportional(10.0),
            COLOR_TEXT_DIM,
        );
        painter.text(
            rect.right_top() + egui::vec2(-8.0, 3.0),
            egui::Align2::RIGHT_TOP,
            &self.value_text,
            egui::FontId::proportional(14.0),
            self.color,
        );

        response
    }
}
