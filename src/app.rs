use eframe::egui;

use crate::data::model::Metric;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BenchViewApp {
    pub state: AppState,
}

impl BenchViewApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for BenchViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu / status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the three charts, side by side ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(Metric::ALL.len(), |columns| {
                for (column, &metric) in columns.iter_mut().zip(Metric::ALL.iter()) {
                    plot::metric_panel(column, &self.state, metric);
                }
            });
        });
    }
}
