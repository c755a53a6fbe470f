use eframe::egui::{self, RichText};

use super::style;
use crate::dashboard::FormState;

/// Two-column label/input grid bound to `form`. Inputs are locked while `enabled` is false.
pub(super) fn render_form_grid(ui: &mut egui::Ui, id: &str, form: &mut FormState, enabled: bool) {
    let palette = style::palette();
    let fields = form.fields();
    egui::Grid::new(id)
        .num_columns(3)
        .spacing([12.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for (index, field) in fields.iter().enumerate() {
                ui.label(field.label).on_hover_text(field.description);
                let coerced = form.is_coerced(index).then(|| form.number(index));
                if let Some(text) = form.text_mut(index) {
                    ui.add_enabled(
                        enabled,
                        egui::TextEdit::singleline(text)
                            .id_salt((id, field.key))
                            .hint_text("0")
                            .desired_width(160.0),
                    )
                    .on_hover_text(field.description);
                }
                if let Some(sent) = coerced {
                    ui.label(
                        RichText::new(format!("sent as {sent}"))
                            .color(palette.text_muted)
                            .italics(),
                    )
                    .on_hover_text("Only the leading number is submitted; the rest is ignored.");
                } else {
                    ui.label("");
                }
                ui.end_row();
            }
        });
}
