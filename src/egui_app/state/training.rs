use std::collections::HashMap;
use std::sync::Arc;

use crate::dashboard::plot_image::DecodedPlot;
use crate::dashboard::{FormState, PlotCategory, RequestStatus, training};
use crate::service::{Hyperparameters, TrainingReport};

/// Decoding progress for one plot of the current training report.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotImageState {
    Loading,
    Ready(Arc<DecodedPlot>),
    Failed(String),
}

/// Training card: hyperparameters, the `/train` request and decoded plots.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingPanelState {
    pub form: FormState,
    pub request: RequestStatus<TrainingReport>,
    pub plot_category: PlotCategory,
    /// Plots decoded for `generation`, keyed by category.
    pub plots: HashMap<PlotCategory, PlotImageState>,
    /// Bumped on every submission so late plot loads from an older report are dropped.
    pub generation: u64,
}

impl TrainingPanelState {
    pub fn new(defaults: &Hyperparameters) -> Self {
        Self {
            form: training::new_form(defaults),
            request: RequestStatus::Idle,
            plot_category: PlotCategory::default(),
            plots: HashMap::new(),
            generation: 0,
        }
    }

    pub fn report(&self) -> Option<&TrainingReport> {
        self.request.result()
    }

    pub fn plot_loading(&self) -> bool {
        self.plots
            .values()
            .any(|state| matches!(state, PlotImageState::Loading))
    }
}
