use eframe::egui::{self, RichText};

use super::advisory_table::render_advisory_table;
use super::form_grid::render_form_grid;
use super::{EguiApp, card, error_label, style};
use crate::dashboard::{RequestStatus, prediction};

impl EguiApp {
    pub(super) fn render_prediction_panel(&mut self, ui: &mut egui::Ui) {
        card(ui, "Profit Prediction", |ui| {
            let enabled = self.controller.ui.prediction.request.submit_enabled();
            render_form_grid(
                ui,
                "prediction_form",
                &mut self.controller.ui.prediction.form,
                enabled,
            );
            ui.add_space(8.0);
            self.render_prediction_actions(ui);
            ui.add_space(8.0);
            self.render_prediction_outcome(ui);
        });
    }

    fn render_prediction_actions(&mut self, ui: &mut egui::Ui) {
        let request = &self.controller.ui.prediction.request;
        let pending = request.is_pending();
        let can_clear = matches!(
            request,
            RequestStatus::Succeeded(_) | RequestStatus::Failed(_)
        );
        let label = if pending { "Predicting..." } else { "Predict" };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!pending, egui::Button::new(label))
                .clicked()
            {
                self.controller.submit_prediction();
            }
            if pending {
                ui.add(egui::Spinner::new().size(16.0));
            }
            if can_clear && ui.button("Clear").clicked() {
                self.controller.clear_prediction();
            }
        });
    }

    fn render_prediction_outcome(&self, ui: &mut egui::Ui) {
        match &self.controller.ui.prediction.request {
            RequestStatus::Idle | RequestStatus::Pending => {}
            RequestStatus::Failed(message) => error_label(ui, message),
            RequestStatus::Succeeded(response) => {
                let palette = style::palette();
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Predicted Profit:").strong());
                    ui.label(
                        RichText::new(prediction::format_prediction(response.prediction))
                            .size(20.0)
                            .color(palette.success)
                            .strong(),
                    );
                });
                ui.add_space(10.0);
                render_advisory_table(ui);
            }
        }
    }
}
