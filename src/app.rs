use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{detail, panels, top_chart, trends};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters, only meaningful for the top chart ----
        if self.state.tab == Tab::TopGames {
            egui::SidePanel::left("filter_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: active view ----
        let tab = self.state.tab;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match tab {
                Tab::TopGames => top_chart::top_games_chart(ui, &self.state),
                Tab::GameStatistics => detail::game_statistics(ui, &mut self.state),
                Tab::PaidTrends => trends::paid_trends(ui, &mut self.state),
            });
        });
    }
}
