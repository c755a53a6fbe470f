use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    pub tone: StatusTone,
    /// Badge label shown next to the status.
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::with_tone("Enter hyperparameters or operating metrics to begin", StatusTone::Idle)
    }

    pub fn with_tone(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
            badge_label: tone.label().to_string(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
