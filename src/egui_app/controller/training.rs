use std::sync::Arc;

use super::EguiController;
use super::jobs::{PlotLoadJob, PlotLoadResult, TrainingJob, TrainingResult};
use crate::dashboard::plots::select_plot;
use crate::dashboard::{PlotCategory, training};
use crate::egui_app::state::PlotImageState;
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Snapshot the hyperparameter form and POST it to `/train`.
    ///
    /// Returns `false` when a training request is already in flight.
    pub fn submit_training(&mut self) -> bool {
        if self.jobs.training_in_progress() || !self.ui.training.request.begin() {
            return false;
        }
        let params = training::build_request(&self.ui.training.form);
        let coerced = self.ui.training.form.coerced_keys();
        if !coerced.is_empty() {
            tracing::debug!(fields = ?coerced, "Training inputs coerced");
        }
        let training = &mut self.ui.training;
        training.generation = training.generation.wrapping_add(1);
        training.plots.clear();
        let generation = training.generation;
        tracing::info!(generation, ?params, "Dispatching training request");
        self.jobs.begin_training(TrainingJob { generation, params });
        self.set_status("Training model...", StatusTone::Busy);
        true
    }

    /// Dismiss the last training result or error.
    pub fn clear_training(&mut self) {
        if self.ui.training.request.is_pending() {
            return;
        }
        let training = &mut self.ui.training;
        training.request.dismiss();
        training.plots.clear();
        // Plot loads still running belong to the dismissed report.
        training.generation = training.generation.wrapping_add(1);
    }

    pub fn select_plot_category(&mut self, category: PlotCategory) {
        self.ui.training.plot_category = category;
        self.request_selected_plot();
    }

    /// Start decoding the selected plot unless it is cached or absent.
    pub(crate) fn request_selected_plot(&mut self) {
        let training = &self.ui.training;
        let category = training.plot_category;
        if training.plots.contains_key(&category) {
            return;
        }
        let Some(reference) = select_plot(training.report(), category) else {
            return;
        };
        let job = PlotLoadJob {
            generation: training.generation,
            category,
            reference: reference.to_string(),
        };
        self.ui
            .training
            .plots
            .insert(category, PlotImageState::Loading);
        self.jobs.begin_plot_load(job);
    }

    pub(super) fn handle_training_finished(&mut self, message: TrainingResult) {
        self.jobs.clear_training();
        if message.generation != self.ui.training.generation {
            return;
        }
        match &message.result {
            Ok(report) => tracing::info!(
                metrics = report.test_metrics.len(),
                rows = report.data_split.total(),
                "Training finished"
            ),
            Err(err) => tracing::warn!("Training failed: {err}"),
        }
        let status = match &message.result {
            Ok(_) => ("Training finished".to_string(), StatusTone::Info),
            Err(err) => (err.to_string(), StatusTone::Error),
        };
        if !self.ui.training.request.finish(message.result) {
            return;
        }
        self.set_status(status.0, status.1);
        self.request_selected_plot();
    }

    pub(super) fn handle_plot_loaded(&mut self, message: PlotLoadResult) {
        if message.generation != self.ui.training.generation {
            return;
        }
        let state = match message.result {
            Ok(plot) => PlotImageState::Ready(Arc::new(plot)),
            Err(err) => {
                tracing::warn!(category = message.category.key(), "Plot decode failed: {err}");
                PlotImageState::Failed(err.to_string())
            }
        };
        self.ui.training.plots.insert(message.category, state);
    }
}
