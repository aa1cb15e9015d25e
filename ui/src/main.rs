mod analytics;
mod app;
mod canvas;
mod palette;
mod theme;

use app::SignalboxApp;
use egui::ViewportBuilder;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Signalbox"),
        ..Default::default()
    };
    eframe::run_native(
        "Signalbox",
        options,
        Box::new(|cc| Ok(Box::new(SignalboxApp::new(cc)?))),
    )
}
