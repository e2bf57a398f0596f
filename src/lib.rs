//! Library exports for the binary, benchmarks and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persistent settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// Inputs and the yield estimator.
pub mod yield_model;
