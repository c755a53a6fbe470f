//! Training form and presentation of a training report.

use super::form::{FieldSpec, FormState};
use crate::service::{DataSplit, Hyperparameters, TrainingReport};

pub static HYPERPARAMETER_FIELDS: [FieldSpec; 9] = [
    FieldSpec {
        key: "n_estimators",
        label: "Estimators",
        description: "Number of boosting rounds (whole number).",
    },
    FieldSpec {
        key: "learning_rate",
        label: "Learning Rate",
        description: "Step size shrinkage applied to each tree.",
    },
    FieldSpec {
        key: "max_depth",
        label: "Max Depth",
        description: "Maximum depth of each tree (whole number).",
    },
    FieldSpec {
        key: "min_child_weight",
        label: "Min Child Weight",
        description: "Minimum sum of instance weight needed in a child.",
    },
    FieldSpec {
        key: "gamma",
        label: "Gamma",
        description: "Minimum loss reduction required to split a leaf.",
    },
    FieldSpec {
        key: "subsample",
        label: "Subsample",
        description: "Fraction of rows sampled for each tree.",
    },
    FieldSpec {
        key: "colsample_bytree",
        label: "Column Sample by Tree",
        description: "Fraction of features sampled for each tree.",
    },
    FieldSpec {
        key: "test_size",
        label: "Test Size",
        description: "Fraction of the dataset held out for testing.",
    },
    FieldSpec {
        key: "validation_size",
        label: "Validation Size",
        description: "Fraction of the dataset held out for validation.",
    },
];

/// A training form pre-filled with `defaults`.
pub fn new_form(defaults: &Hyperparameters) -> FormState {
    // `{:?}` keeps a trailing `.0` so float fields read as floats.
    let values = [
        defaults.n_estimators.to_string(),
        format!("{:?}", defaults.learning_rate),
        defaults.max_depth.to_string(),
        format!("{:?}", defaults.min_child_weight),
        format!("{:?}", defaults.gamma),
        format!("{:?}", defaults.subsample),
        format!("{:?}", defaults.colsample_bytree),
        format!("{:?}", defaults.test_size),
        format!("{:?}", defaults.validation_size),
    ];
    FormState::with_values(&HYPERPARAMETER_FIELDS, values)
}

/// Snapshot the form into a request body.
///
/// Integer fields are parsed leniently as floats and truncated toward zero.
pub fn build_request(form: &FormState) -> Hyperparameters {
    Hyperparameters {
        n_estimators: form.number(0) as i64,
        learning_rate: form.number(1),
        max_depth: form.number(2) as i64,
        min_child_weight: form.number(3),
        gamma: form.number(4),
        subsample: form.number(5),
        colsample_bytree: form.number(6),
        test_size: form.number(7),
        validation_size: form.number(8),
    }
}

/// `(name, value)` rows for the metrics table, sorted by name.
pub fn metric_rows(report: &TrainingReport) -> Vec<(String, String)> {
    report
        .test_metrics
        .iter()
        .map(|(name, value)| (name.clone(), format!("{value:.4}")))
        .collect()
}

pub fn split_summary(split: &DataSplit) -> String {
    format!(
        "Train {} / Validation {} / Test {} ({} rows)",
        split.train_size,
        split.validation_size,
        split.test_size,
        split.total()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn defaults_prefill_and_round_trip() {
        let form = new_form(&Hyperparameters::default());
        assert_eq!(form.value("n_estimators"), Some("100"));
        assert_eq!(form.value("min_child_weight"), Some("1.0"));
        assert_eq!(form.value("gamma"), Some("0.0"));
        assert_eq!(build_request(&form), Hyperparameters::default());
    }

    #[test]
    fn integer_fields_truncate_and_bad_input_is_zero() {
        let mut form = new_form(&Hyperparameters::default());
        form.set("n_estimators", "250.9");
        form.set("max_depth", "-2.5");
        form.set("learning_rate", "fast");
        let params = build_request(&form);
        assert_eq!(params.n_estimators, 250);
        assert_eq!(params.max_depth, -2);
        assert_eq!(params.learning_rate, 0.0);
    }

    #[test]
    fn metrics_sorted_with_four_decimals() {
        let report = TrainingReport {
            test_metrics: BTreeMap::from([("rmse".to_string(), 12.5), ("mae".to_string(), 3.14159)]),
            training_history_plots: None,
            feature_importance_plot: None,
            predictions_plot: None,
            residuals_plots: None,
            residuals_distribution_plots: None,
            data_split: DataSplit {
                train_size: 600,
                validation_size: 200,
                test_size: 200,
            },
        };
        assert_eq!(
            metric_rows(&report),
            vec![
                ("mae".to_string(), "3.1416".to_string()),
                ("rmse".to_string(), "12.5000".to_string()),
            ]
        );
        assert_eq!(
            split_summary(&report.data_split),
            "Train 600 / Validation 200 / Test 200 (1000 rows)"
        );
    }
}
