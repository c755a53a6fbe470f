//! Blocking calls to the training/prediction endpoints.
//!
//! Every failure is folded into [`ServiceError`], whose `Display` output is
//! the message shown to the user.

use std::fmt;
use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::wire::{Hyperparameters, PredictRequest, PredictResponse, TrainingReport};
use crate::config::{NetworkSettings, ServiceSettings};
use crate::http_client;

/// Error bodies are only kept for diagnostics, so they are read with a small cap.
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Remote endpoints exposed by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Train,
    Predict,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Train => "/train",
            Self::Predict => "/predict",
        }
    }

    /// Name used in user-facing error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Train => "Train",
            Self::Predict => "Predict",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of a single service call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never reached the service or the connection broke.
    #[error("{endpoint} API request failed: {detail}")]
    Transport { endpoint: Endpoint, detail: String },
    /// The service answered with a non-success status.
    #[error("{endpoint} API failed with status {code}")]
    Status {
        endpoint: Endpoint,
        code: u16,
        body: String,
    },
    /// The service answered successfully but the body was unusable.
    #[error("{endpoint} API returned an unexpected response: {detail}")]
    Decode { endpoint: Endpoint, detail: String },
}

impl ServiceError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}

/// Configured handle to the remote service. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ServiceClient {
    agent: ureq::Agent,
    base_url: String,
    max_response_bytes: usize,
}

impl ServiceClient {
    pub fn new(service: &ServiceSettings, network: &NetworkSettings) -> Self {
        Self {
            agent: http_client::build_agent(network),
            base_url: service.base_url.trim_end_matches('/').to_string(),
            max_response_bytes: network.max_response_bytes,
        }
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Train a model with the given hyperparameters.
    pub fn train(&self, params: &Hyperparameters) -> Result<TrainingReport, ServiceError> {
        self.post_json(Endpoint::Train, params)
    }

    /// Predict profit for one feature vector.
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
        self.post_json(Endpoint::Predict, request)
    }

    /// Download an arbitrary resource (e.g. a plot URL) with the response cap.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, String> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(format!("HTTP {code}")),
            Err(ureq::Error::Transport(err)) => return Err(err.to_string()),
        };
        http_client::read_response_bytes(response, self.max_response_bytes)
            .map_err(|err| err.to_string())
    }

    fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        let request = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(body) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, MAX_ERROR_BODY_BYTES)
                    .unwrap_or_else(|err| err);
                tracing::debug!(%endpoint, code, body = %body, "Service rejected request");
                return Err(ServiceError::Status {
                    endpoint,
                    code,
                    body,
                });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ServiceError::Transport {
                    endpoint,
                    detail: err.to_string(),
                });
            }
        };

        let bytes = http_client::read_response_bytes(response, self.max_response_bytes)
            .map_err(|err| map_read_error(endpoint, err))?;
        decode_body(endpoint, &bytes)
    }
}

fn map_read_error(endpoint: Endpoint, err: io::Error) -> ServiceError {
    if err.kind() == io::ErrorKind::InvalidData {
        ServiceError::Decode {
            endpoint,
            detail: err.to_string(),
        }
    } else {
        ServiceError::Transport {
            endpoint,
            detail: err.to_string(),
        }
    }
}

fn decode_body<R: DeserializeOwned>(endpoint: Endpoint, bytes: &[u8]) -> Result<R, ServiceError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ServiceError::Decode {
            endpoint,
            detail: "empty response body".to_string(),
        });
    }
    serde_json::from_slice(bytes).map_err(|err| ServiceError::Decode {
        endpoint,
        detail: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::FEATURE_COUNT;
    use crate::test_support::{MockService, closed_url};

    fn client(url: &str) -> ServiceClient {
        ServiceClient::new(
            &ServiceSettings {
                base_url: url.to_string(),
            },
            &NetworkSettings::default(),
        )
    }

    fn zeros() -> PredictRequest {
        PredictRequest {
            features: [0.0; FEATURE_COUNT],
        }
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let client = client("https://models.example.com/");
        assert_eq!(
            client.endpoint_url(Endpoint::Predict),
            "https://models.example.com/predict"
        );
        assert_eq!(client.endpoint_url(Endpoint::Train), "https://models.example.com/train");
    }

    #[test]
    fn predict_posts_json_features() {
        let mock = MockService::respond(200, r#"{"prediction": 4821.5}"#);
        let response = client(&mock.url).predict(&zeros()).unwrap();
        assert_eq!(response.prediction, 4821.5);

        let request = mock.request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/predict");
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
        let features = request.json()["features"].as_array().unwrap().clone();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert!(features.iter().all(|value| value.as_f64() == Some(0.0)));
    }

    #[test]
    fn server_error_reports_status_code() {
        let mock = MockService::respond(500, r#"{"detail": "model not loaded"}"#);
        let err = client(&mock.url).predict(&zeros()).unwrap_err();
        assert_eq!(err.to_string(), "Predict API failed with status 500");
        match err {
            ServiceError::Status { code, body, .. } => {
                assert_eq!(code, 500);
                assert!(body.contains("model not loaded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn train_status_error_names_train_endpoint() {
        let mock = MockService::respond(422, r#"{"detail": "bad"}"#);
        let err = client(&mock.url)
            .train(&Hyperparameters::default())
            .unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Train);
        assert!(err.to_string().starts_with("Train API failed with status 422"));
        assert_eq!(mock.request().path, "/train");
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let mock = MockService::respond(200, r#"{"predicted": "lots"}"#);
        let err = client(&mock.url).predict(&zeros()).unwrap_err();
        assert!(matches!(err, ServiceError::Decode { .. }));
        assert!(err.to_string().contains("unexpected response"));
    }

    #[test]
    fn empty_success_body_is_decode_error() {
        let mock = MockService::respond(200, "");
        let err = client(&mock.url).predict(&zeros()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Decode {
                endpoint: Endpoint::Predict,
                detail: "empty response body".to_string(),
            }
        );
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let err = client(&closed_url()).predict(&zeros()).unwrap_err();
        assert!(matches!(err, ServiceError::Transport { .. }));
        assert!(err.to_string().starts_with("Predict API request failed"));
    }

    #[test]
    fn train_sends_all_hyperparameters() {
        let body = r#"{
            "test_metrics": {"rmse": 1.5},
            "training_history_plots": "a",
            "feature_importance_plot": "b",
            "predictions_plot": "c",
            "residuals_plots": "d",
            "residuals_distribution_plots": "e",
            "data_split": {"train_size": 6, "validation_size": 2, "test_size": 2}
        }"#;
        let mock = MockService::respond(200, body);
        let params = Hyperparameters {
            n_estimators: 300,
            ..Hyperparameters::default()
        };
        let report = client(&mock.url).train(&params).unwrap();
        assert_eq!(report.test_metrics["rmse"], 1.5);
        assert_eq!(report.residuals_distribution_plots.as_deref(), Some("e"));

        let sent = mock.request().json();
        assert_eq!(sent["n_estimators"], serde_json::json!(300));
        assert_eq!(sent["colsample_bytree"], serde_json::json!(0.8));
        assert_eq!(sent["validation_size"], serde_json::json!(0.2));
    }
}
