//! Shared state types for the egui UI.

mod prediction;
mod status;
mod training;

pub use prediction::PredictionPanelState;
pub use status::StatusBarState;
pub use training::{PlotImageState, TrainingPanelState};

use crate::config::AppConfig;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub training: TrainingPanelState,
    pub prediction: PredictionPanelState,
    /// Base URL shown in the status bar.
    pub service_url: String,
}

impl UiState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            status: StatusBarState::idle(),
            training: TrainingPanelState::new(&config.training_defaults),
            prediction: PredictionPanelState::default(),
            service_url: config.service.base_url.clone(),
        }
    }
}
