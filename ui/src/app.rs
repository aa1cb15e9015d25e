use crate::analytics::KpiCard;
use crate::palette::render_controls;
use crate::theme::*;
use eframe::egui;
use signalbox_core::config::clamp_fixed_duration;
use signalbox_core::{ConfigError, MetricPoint, SimConfig, Simulation, US_PER_SEC};

/// Real seconds between two simulation steps.
pub const TICK_INTERVAL_SECS: f64 = 1.0;

pub struct SignalboxApp {
    pub simulation: Simulation,
    /// Slider value; pushed into the simulation whenever it changes.
    pub fixed_duration_secs: u64,
    pub last_tick_time: f64,
    pub now_secs: f64,
}

impl SignalboxApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, ConfigError> {
        let now_secs = cc.egui_ctx.input(|i| i.time);
        let config = SimConfig::default();
        let fixed_duration_secs = config.fixed_duration_secs;
        let simulation = Simulation::new(config, to_us(now_secs))?;
        Ok(Self {
            simulation,
            fixed_duration_secs,
            last_tick_time: now_secs,
            now_secs,
        })
    }

    pub fn now_us(&self) -> u64 {
        to_us(self.now_secs)
    }

    pub fn start(&mut self) {
        let now = self.now_us();
        self.simulation.start(now);
        // The first step runs immediately, later ones once per interval.
        self.simulation.tick(now);
        self.last_tick_time = self.now_secs;
    }

    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    pub fn reset(&mut self) {
        let now = self.now_us();
        self.simulation.reset(now);
    }

    pub fn apply_fixed_duration(&mut self) {
        self.fixed_duration_secs = clamp_fixed_duration(self.fixed_duration_secs);
        if let Err(e) = self.simulation.set_fixed_duration(self.fixed_duration_secs) {
            log::warn!("Ignoring fixed duration: {}", e);
            self.fixed_duration_secs = self.simulation.fixed_duration_secs();
        }
    }

    fn render_kpis(&self, ui: &mut egui::Ui) {
        let history: Vec<MetricPoint> = self.simulation.history().iter().copied().collect();
        let kpis = self.simulation.kpis();

        ui.horizontal(|ui| {
            ui.add(KpiCard::new(
                "TOTAL CARS CURRENTLY WAITING",
                &history,
                |m| m.waiting,
                COLOR_WARN,
                kpis.total_waiting.to_string(),
            ));
            ui.add_space(8.0);
            ui.add(KpiCard::new(
                "TOTAL CARS PASSED",
                &history,
                |m| m.discharged,
                COLOR_SUCCESS,
                kpis.total_discharged.to_string(),
            ));
            ui.add_space(8.0);
            ui.add(KpiCard::new(
                "AVERAGE WAIT TIME (SECONDS)",
                &history,
                |m| m.average_wait,
                COLOR_ACCENT,
                format!("{:.2}", kpis.average_wait),
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}", self.simulation.ticks))
                            .strong()
                            .color(COLOR_TEXT),
                    );
                    ui.label(egui::RichText::new("TICKS").small().color(COLOR_TEXT_DIM));
                });
            });
        });
    }
}

fn to_us(secs: f64) -> u64 {
    (secs * US_PER_SEC as f64) as u64
}

impl eframe::App for SignalboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.now_secs = ctx.input(|i| i.time);

        if self.simulation.running {
            let since_tick = self.now_secs - self.last_tick_time;
            if since_tick >= TICK_INTERVAL_SECS {
                self.simulation.tick(self.now_us());
                self.last_tick_time = self.now_secs;
            }
            let until_next = (TICK_INTERVAL_SECS - (self.now_secs - self.last_tick_time)).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(until_next));
        }

        egui::TopBottomPanel::bottom("kpi_dashboard")
            .frame(egui::Frame::none().fill(COLOR_PANEL).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_kpis(ui);
            });

        egui::SidePanel::left("controls")
            .default_width(220.0)
            .show(ctx, |ui| {
                render_controls(ui, self);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(COLOR_BG))
            .show(ctx, |ui| {
                self.render_intersection(ui);
            });
    }
}
