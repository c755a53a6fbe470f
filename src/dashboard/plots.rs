//! Plot category selection over a training report.

use crate::service::TrainingReport;

/// Diagnostic plots the training endpoint can return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlotCategory {
    #[default]
    TrainingHistory,
    FeatureImportance,
    Prediction,
    ResidualScatter,
    ResidualDistribution,
}

impl PlotCategory {
    /// Every category, in selector order.
    pub const ALL: [PlotCategory; 5] = [
        Self::TrainingHistory,
        Self::FeatureImportance,
        Self::Prediction,
        Self::ResidualScatter,
        Self::ResidualDistribution,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::TrainingHistory => "training",
            Self::FeatureImportance => "feature",
            Self::Prediction => "prediction",
            Self::ResidualScatter => "scatter",
            Self::ResidualDistribution => "derivative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TrainingHistory => "Training History",
            Self::FeatureImportance => "Feature Importance",
            Self::Prediction => "Prediction Plot",
            Self::ResidualScatter => "Residual Scatter Plot",
            Self::ResidualDistribution => "Residual Derivative Plot",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Placeholder text when no image exists for this category.
    pub fn unavailable_message(self) -> String {
        format!("No image available for {}", self.label())
    }
}

/// Image reference for `category`, or `None` when there is no successful
/// report or the report carries no usable reference for it.
pub fn select_plot(report: Option<&TrainingReport>, category: PlotCategory) -> Option<&str> {
    let report = report?;
    let reference = match category {
        PlotCategory::TrainingHistory => &report.training_history_plots,
        PlotCategory::FeatureImportance => &report.feature_importance_plot,
        PlotCategory::Prediction => &report.predictions_plot,
        PlotCategory::ResidualScatter => &report.residuals_plots,
        PlotCategory::ResidualDistribution => &report.residuals_distribution_plots,
    };
    reference
        .as_deref()
        .map(str::trim)
        .filter(|reference| !reference.is_empty())
}
