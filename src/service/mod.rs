//! Client for the remote XGBoost training/prediction service.

pub mod api;
mod wire;

pub use api::{Endpoint, ServiceClient, ServiceError};
pub use wire::{
    DataSplit, FEATURE_COUNT, Hyperparameters, PredictRequest, PredictResponse, TrainingReport,
};
