//! JSON bodies exchanged with the `/train` and `/predict` endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of features the prediction model expects.
pub const FEATURE_COUNT: usize = 14;

/// Body of `POST /train`. Field order matches the service's schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    pub n_estimators: i64,
    pub learning_rate: f64,
    pub max_depth: i64,
    pub min_child_weight: f64,
    pub gamma: f64,
    pub subsample: f64,
    pub colsample_bytree: f64,
    pub test_size: f64,
    pub validation_size: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            learning_rate: 0.1,
            max_depth: 5,
            min_child_weight: 1.0,
            gamma: 0.0,
            subsample: 0.8,
            colsample_bytree: 0.8,
            test_size: 0.2,
            validation_size: 0.2,
        }
    }
}

/// Successful `/train` response.
///
/// Plot fields are opaque references: a URL, a `data:` URI or bare base64.
/// Absent plots decode as `None`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrainingReport {
    pub test_metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub training_history_plots: Option<String>,
    #[serde(default)]
    pub feature_importance_plot: Option<String>,
    #[serde(default)]
    pub predictions_plot: Option<String>,
    #[serde(default)]
    pub residuals_plots: Option<String>,
    #[serde(default)]
    pub residuals_distribution_plots: Option<String>,
    pub data_split: DataSplit,
}

/// Row counts for each dataset partition used during training.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct DataSplit {
    pub train_size: u64,
    pub validation_size: u64,
    pub test_size: u64,
}

impl DataSplit {
    /// Sum of all partitions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.train_size
            .saturating_add(self.validation_size)
            .saturating_add(self.test_size)
    }
}

/// Body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictRequest {
    pub features: [f64; FEATURE_COUNT],
}

/// Successful `/predict` response.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperparameters_serialize_with_integer_fields() {
        let value = serde_json::to_value(Hyperparameters::default()).unwrap();
        assert_eq!(value["n_estimators"], serde_json::json!(100));
        assert_eq!(value["max_depth"], serde_json::json!(5));
        assert_eq!(value["learning_rate"], serde_json::json!(0.1));
        assert_eq!(value.as_object().unwrap().len(), 9);
    }

    #[test]
    fn training_report_tolerates_missing_plot() {
        let body = r#"{
            "test_metrics": {"rmse": 12.5, "r2": 0.91},
            "training_history_plots": "https://plots.example.com/history.png",
            "feature_importance_plot": "data:image/png;base64,AAAA",
            "predictions_plot": "AAAA",
            "residuals_plots": "AAAA",
            "data_split": {"train_size": 600, "validation_size": 200, "test_size": 200}
        }"#;
        let report: TrainingReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.residuals_distribution_plots, None);
        assert_eq!(report.data_split.total(), 1000);
        assert_eq!(report.test_metrics.keys().collect::<Vec<_>>(), ["r2", "rmse"]);
    }

    #[test]
    fn data_split_total_saturates_on_huge_counts() {
        let body = r#"{
            "test_metrics": {},
            "data_split": {"train_size": 18446744073709551615, "validation_size": 1, "test_size": 0}
        }"#;
        let report: TrainingReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.data_split.total(), u64::MAX);
    }

    #[test]
    fn training_report_requires_data_split() {
        let body = r#"{"test_metrics": {}}"#;
        assert!(serde_json::from_str::<TrainingReport>(body).is_err());
    }

    #[test]
    fn predict_request_is_a_flat_feature_array() {
        let request = PredictRequest {
            features: [0.0; FEATURE_COUNT],
        };
        let text = serde_json::to_string(&request).unwrap();
        assert!(text.starts_with(r#"{"features":[0.0,"#));
        assert_eq!(
            serde_json::to_value(&request).unwrap()["features"]
                .as_array()
                .unwrap()
                .len(),
            FEATURE_COUNT
        );
    }
}
