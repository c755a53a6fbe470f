use super::EguiController;
use super::jobs::JobMessage;

impl EguiController {
    /// Apply results delivered by worker threads. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::TrainingFinished(message) => self.handle_training_finished(message),
                JobMessage::PredictionFinished(message) => {
                    self.handle_prediction_finished(message)
                }
                JobMessage::PlotLoaded(message) => self.handle_plot_loaded(message),
            }
        }
    }
}
