use crate::app::SignalboxApp;
use crate::theme::*;
use eframe::egui;
use signalbox_core::config::{MAX_FIXED_DURATION_SECS, MIN_FIXED_DURATION_SECS};
use signalbox_core::{get_palette_info, ControlMode};

pub fn render_controls(ui: &mut egui::Ui, app: &mut SignalboxApp) {
    ui.add_space(15.0);
    ui.heading("Controls");
    ui.add_space(10.0);

    ui.label(egui::RichText::new("CONTROL MODE").small().color(COLOR_TEXT_DIM));
    let mut mode = app.simulation.mode;
    for (kind, description, rgb) in get_palette_info() {
        let color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        let text = egui::RichText::new(kind.label()).color(color);
        ui.radio_value(&mut mode, kind, text).on_hover_text(description);
    }
    app.simulation.set_mode(mode);

    if mode == ControlMode::FixedTimer {
        ui.add_space(10.0);
        ui.label("Fixed Green Light Duration:");
        let slider = egui::Slider::new(
            &mut app.fixed_duration_secs,
            MIN_FIXED_DURATION_SECS..=MAX_FIXED_DURATION_SECS,
        )
        .suffix("s");
        if ui.add(slider).changed() {
            app.apply_fixed_duration();
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(15.0);
        if ui.button(egui::RichText::new("🔄 Reset Simulation").color(COLOR_CRITICAL)).clicked() {
            app.reset();
        }

        ui.add_space(10.0);
        let btn = if app.simulation.running {
            "⏸ Stop Simulation"
        } else {
            "▶ Start Simulation"
        };
        if ui
            .add_sized([ui.available_width(), 35.0], egui::Button::new(btn).fill(COLOR_ACCENT.gamma_multiply(0.2)))
            .clicked()
        {
            if app.simulation.running {
                app.stop();
            } else {
                app.start();
            }
        }

        ui.add_space(15.0);
        ui.separator();
    });
}
