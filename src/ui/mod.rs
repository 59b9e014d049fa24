pub mod detail;
pub mod panels;
pub mod top_chart;
pub mod trends;

use eframe::egui::{RichText, Ui};

/// A caption over a large value, like a dashboard metric tile.
pub fn metric(ui: &mut Ui, label: &str, value: impl Into<String>) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value.into()).size(26.0).strong());
    ui.add_space(8.0);
}

/// Centered message shown instead of a chart or table.
pub fn placeholder(ui: &mut Ui, text: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(text).italics());
    });
}
