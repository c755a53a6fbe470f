use super::EguiController;
use super::jobs::{PredictionJob, PredictionResult};
use crate::dashboard::prediction;
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Snapshot the feature form and POST it to `/predict`.
    ///
    /// Returns `false` when a prediction is already in flight.
    pub fn submit_prediction(&mut self) -> bool {
        if self.jobs.prediction_in_progress() || !self.ui.prediction.request.begin() {
            return false;
        }
        let request = prediction::build_request(&self.ui.prediction.form);
        let coerced = self.ui.prediction.form.coerced_keys();
        if !coerced.is_empty() {
            tracing::debug!(fields = ?coerced, "Prediction inputs coerced");
        }
        tracing::info!(features = ?request.features, "Dispatching prediction request");
        self.jobs.begin_prediction(PredictionJob { request });
        self.set_status("Predicting...", StatusTone::Busy);
        true
    }

    /// Dismiss the last prediction or error.
    pub fn clear_prediction(&mut self) {
        self.ui.prediction.request.dismiss();
    }

    pub(super) fn handle_prediction_finished(&mut self, message: PredictionResult) {
        self.jobs.clear_prediction();
        let status = match &message.result {
            Ok(response) => {
                tracing::info!(prediction = response.prediction, "Prediction finished");
                (
                    format!(
                        "Predicted profit: {}",
                        prediction::format_prediction(response.prediction)
                    ),
                    StatusTone::Info,
                )
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                (err.to_string(), StatusTone::Error)
            }
        };
        if self.ui.prediction.request.finish(message.result) {
            self.set_status(status.0, status.1);
        }
    }
}
