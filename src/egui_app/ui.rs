//! egui renderer for the dashboard.

mod advisory_table;
mod form_grid;
mod plot_view;
mod prediction_panel;
mod status_area;
pub mod style;
mod training_panel;

use std::collections::HashMap;
use std::time::Duration;

use eframe::egui::{self, Frame, Margin, RichText, TextureHandle};

use crate::config::AppConfig;
use crate::dashboard::PlotCategory;
use crate::egui_app::controller::EguiController;

/// Smallest window size that keeps both cards readable.
pub const MIN_VIEWPORT_SIZE: [f32; 2] = [720.0, 560.0];

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Uploaded plot textures keyed by training generation and category.
    plot_textures: HashMap<(u64, PlotCategory), TextureHandle>,
}

impl EguiApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: EguiController::new(config),
            visuals_set: false,
            plot_textures: HashMap::new(),
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("XGB Profitability Dashboard").strong());
            ui.label(RichText::new("Optimize Your Aviation Profits").color(palette.text_muted));
        });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(style::palette().bg_secondary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("dashboard_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_header(ui);
                        ui.add_space(12.0);
                        self.render_training_panel(ui);
                        ui.add_space(16.0);
                        self.render_prediction_panel(ui);
                    });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_status(ctx);
        self.render_central(ctx);
        if self.controller.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}

/// Framed container used for both dashboard cards.
fn card<R>(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(18.0).strong());
            ui.separator();
            add_contents(ui)
        })
        .inner
}

/// Red inline message shown in place of a result.
fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.label(RichText::new(message).color(style::error_text()));
}
