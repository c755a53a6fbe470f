use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::dashboard::PlotCategory;
use crate::dashboard::plot_image::{self, DecodedPlot, PlotImageError};
use crate::service::{
    Hyperparameters, PredictRequest, PredictResponse, ServiceClient, ServiceError, TrainingReport,
};

pub(crate) enum JobMessage {
    TrainingFinished(TrainingResult),
    PredictionFinished(PredictionResult),
    PlotLoaded(PlotLoadResult),
}

#[derive(Debug)]
pub(crate) struct TrainingJob {
    pub(crate) generation: u64,
    pub(crate) params: Hyperparameters,
}

#[derive(Debug)]
pub(crate) struct TrainingResult {
    pub(crate) generation: u64,
    pub(crate) result: Result<TrainingReport, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request: PredictRequest,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) result: Result<PredictResponse, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct PlotLoadJob {
    pub(crate) generation: u64,
    pub(crate) category: PlotCategory,
    pub(crate) reference: String,
}

#[derive(Debug)]
pub(crate) struct PlotLoadResult {
    pub(crate) generation: u64,
    pub(crate) category: PlotCategory,
    pub(crate) result: Result<DecodedPlot, PlotImageError>,
}

/// Worker threads plus the channel they report back on.
pub(crate) struct ControllerJobs {
    client: ServiceClient,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    training_in_progress: bool,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(crate) fn new(client: ServiceClient) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            client,
            message_tx,
            message_rx,
            training_in_progress: false,
            prediction_in_progress: false,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(crate) fn training_in_progress(&self) -> bool {
        self.training_in_progress
    }

    pub(crate) fn prediction_in_progress(&self) -> bool {
        self.prediction_in_progress
    }

    pub(crate) fn begin_training(&mut self, job: TrainingJob) {
        if self.training_in_progress {
            return;
        }
        self.training_in_progress = true;
        let tx = self.message_tx.clone();
        let client = self.client.clone();
        thread::spawn(move || {
            let result = client.train(&job.params);
            let _ = tx.send(JobMessage::TrainingFinished(TrainingResult {
                generation: job.generation,
                result,
            }));
        });
    }

    pub(crate) fn clear_training(&mut self) {
        self.training_in_progress = false;
    }

    pub(crate) fn begin_prediction(&mut self, job: PredictionJob) {
        if self.prediction_in_progress {
            return;
        }
        self.prediction_in_progress = true;
        let tx = self.message_tx.clone();
        let client = self.client.clone();
        thread::spawn(move || {
            let result = client.predict(&job.request);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionResult { result }));
        });
    }

    pub(crate) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }

    pub(crate) fn begin_plot_load(&mut self, job: PlotLoadJob) {
        let tx = self.message_tx.clone();
        let client = self.client.clone();
        thread::spawn(move || {
            let result = plot_image::load_plot(&client, &job.reference);
            let _ = tx.send(JobMessage::PlotLoaded(PlotLoadResult {
                generation: job.generation,
                category: job.category,
                result,
            }));
        });
    }
}
