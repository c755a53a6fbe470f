//! Library exports for the Aeroprofit dashboard binary and its tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persistent dashboard settings.
pub mod config;
/// Pure dashboard domain: forms, request lifecycle, plots, advisory table.
pub mod dashboard;
/// egui controller, UI state and renderer.
pub mod egui_app;
/// Shared HTTP agent construction and bounded response reads.
pub mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Remote training/prediction service client.
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
