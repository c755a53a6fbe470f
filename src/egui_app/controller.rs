//! Owns the UI state and bridges it to the remote service.

mod background_jobs;
mod jobs;
mod prediction;
mod training;


use crate::config::AppConfig;
use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::service::ServiceClient;
use jobs::ControllerJobs;

/// Maintains app state and bridges the dashboard flows to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(config: &AppConfig) -> Self {
        let client = ServiceClient::new(&config.service, &config.network);
        Self {
            ui: UiState::new(config),
            jobs: ControllerJobs::new(client),
        }
    }

    /// True while any request or plot download has yet to report back.
    pub fn has_pending_work(&self) -> bool {
        self.ui.training.request.is_pending()
            || self.ui.prediction.request.is_pending()
            || self.ui.training.plot_loading()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
