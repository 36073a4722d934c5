use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selection controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom half: scatter ----
        egui::TopBottomPanel::bottom("scatter_panel")
            .resizable(true)
            .default_height(ctx.available_rect().height() * 0.5)
            .show(ctx, |ui| {
                plot::scatter_plot(ui, &self.state);
            });

        // ---- Central panel: pie ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::pie_chart(ui, &self.state);
        });
    }
}
