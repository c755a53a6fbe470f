use eframe::egui::{self, ColorImage, RichText, TextureOptions};

use super::{EguiApp, error_label, style};
use crate::dashboard::plots::select_plot;
use crate::egui_app::state::PlotImageState;

impl EguiApp {
    pub(super) fn render_plot(&mut self, ui: &mut egui::Ui) {
        let training = &self.controller.ui.training;
        let category = training.plot_category;
        let generation = training.generation;
        ui.label(RichText::new(category.label()).strong());

        if select_plot(training.report(), category).is_none() {
            ui.label(RichText::new(category.unavailable_message()).color(style::palette().text_muted));
            return;
        }
        match training.plots.get(&category) {
            None | Some(PlotImageState::Loading) => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.label("Loading plot...");
                });
            }
            Some(PlotImageState::Failed(reason)) => {
                error_label(ui, &format!("Could not load {}: {reason}", category.label()));
            }
            Some(PlotImageState::Ready(plot)) => {
                // Textures from older reports are dropped on the first new upload.
                self.plot_textures.retain(|(cached, _), _| *cached == generation);
                let texture = self
                    .plot_textures
                    .entry((generation, category))
                    .or_insert_with(|| {
                        let image = ColorImage::from_rgba_unmultiplied(
                            [plot.width as usize, plot.height as usize],
                            &plot.rgba,
                        );
                        ui.ctx().load_texture(
                            format!("plot_{generation}_{}", category.key()),
                            image,
                            TextureOptions::LINEAR,
                        )
                    });
                let max_width = ui.available_width().min(texture.size_vec2().x);
                ui.add(
                    egui::Image::new(&*texture)
                        .max_width(max_width)
                        .maintain_aspect_ratio(true),
                );
            }
        }
    }
}
