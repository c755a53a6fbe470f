use eframe::egui::{self, RichText};

use super::style;
use crate::dashboard::advisory_rows;

pub(super) fn render_advisory_table(ui: &mut egui::Ui) {
    ui.label(RichText::new("Profitability Recommendations").strong());
    egui::Grid::new("advisory_table")
        .num_columns(3)
        .spacing([16.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Feature (Importance)").strong());
            ui.label(RichText::new("Impact").strong());
            ui.label(RichText::new("Recommendation").strong());
            ui.end_row();
            for row in advisory_rows() {
                ui.label(row.feature_cell());
                ui.label(RichText::new(row.impact.label()).color(style::impact_color(row.impact)));
                ui.add(egui::Label::new(row.recommendation).wrap());
                ui.end_row();
            }
        });
}
