//! Entry point for the egui-based Aeroprofit dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use aeroprofit::config;
use aeroprofit::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use aeroprofit::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Aeroprofit")
        .with_inner_size([1120.0, 900.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let loaded = config::load_or_default();
    eframe::run_native(
        "Aeroprofit",
        native_options,
        Box::new(move |_cc| match loaded {
            Ok(cfg) => {
                tracing::info!(base_url = %cfg.service.base_url, "Configuration loaded");
                Ok(Box::new(EguiApp::new(&cfg)))
            }
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
