use crate::dashboard::{FormState, RequestStatus, prediction};
use crate::service::PredictResponse;

/// Prediction card: feature inputs and the `/predict` request lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionPanelState {
    pub form: FormState,
    pub request: RequestStatus<PredictResponse>,
}

impl Default for PredictionPanelState {
    fn default() -> Self {
        Self {
            form: prediction::new_form(),
            request: RequestStatus::Idle,
        }
    }
}
