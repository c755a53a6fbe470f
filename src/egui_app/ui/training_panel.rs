use eframe::egui::{self, RichText};

use super::form_grid::render_form_grid;
use super::{EguiApp, card, error_label, style};
use crate::dashboard::{PlotCategory, RequestStatus, training};

impl EguiApp {
    pub(super) fn render_training_panel(&mut self, ui: &mut egui::Ui) {
        card(ui, "Model Training", |ui| {
            self.render_plot_selector(ui);
            ui.add_space(8.0);
            let enabled = self.controller.ui.training.request.submit_enabled();
            render_form_grid(
                ui,
                "training_form",
                &mut self.controller.ui.training.form,
                enabled,
            );
            ui.add_space(8.0);
            self.render_training_actions(ui);
            ui.add_space(8.0);
            self.render_training_outcome(ui);
        });
    }

    fn render_plot_selector(&mut self, ui: &mut egui::Ui) {
        let current = self.controller.ui.training.plot_category;
        let mut selected = current;
        ui.horizontal(|ui| {
            ui.label("Plot");
            egui::ComboBox::from_id_salt("plot_category")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for category in PlotCategory::ALL {
                        ui.selectable_value(&mut selected, category, category.label());
                    }
                });
        });
        if selected != current {
            self.controller.select_plot_category(selected);
        }
    }

    fn render_training_actions(&mut self, ui: &mut egui::Ui) {
        let request = &self.controller.ui.training.request;
        let pending = request.is_pending();
        let can_clear = matches!(
            request,
            RequestStatus::Succeeded(_) | RequestStatus::Failed(_)
        );
        let label = if pending { "Fetching..." } else { "Fetch Data" };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!pending, egui::Button::new(label))
                .clicked()
            {
                self.controller.submit_training();
            }
            if pending {
                ui.add(egui::Spinner::new().size(16.0));
            }
            if can_clear && ui.button("Clear").clicked() {
                self.controller.clear_training();
            }
        });
    }

    fn render_training_outcome(&mut self, ui: &mut egui::Ui) {
        match &self.controller.ui.training.request {
            RequestStatus::Idle | RequestStatus::Pending => {}
            RequestStatus::Failed(message) => error_label(ui, message),
            RequestStatus::Succeeded(report) => {
                let metrics = training::metric_rows(report);
                let split = training::split_summary(&report.data_split);
                self.render_plot(ui);
                ui.add_space(8.0);
                render_metrics(ui, &metrics, &split);
            }
        }
    }
}

fn render_metrics(ui: &mut egui::Ui, metrics: &[(String, String)], split: &str) {
    let palette = style::palette();
    ui.label(RichText::new("Test Metrics").strong());
    egui::Grid::new("training_metrics")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for (name, value) in metrics {
                ui.label(name);
                ui.label(RichText::new(value).monospace());
                ui.end_row();
            }
        });
    ui.add_space(4.0);
    ui.label(RichText::new(split).color(palette.text_muted));
}
