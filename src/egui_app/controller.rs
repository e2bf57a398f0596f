//! Owns the form inputs and drives estimation jobs for the egui renderer.

mod background_jobs;
mod inputs;
mod jobs;


use crate::config::{AppSettings, EstimatorSettings, StaleResults};
use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::yield_model::Inputs;
use jobs::{ControllerJobs, PredictionJob};
use std::time::Duration;

/// Maintains app state and bridges the estimator to the egui UI.
pub struct PredictorController {
    pub ui: UiState,
    inputs: Inputs,
    estimator: EstimatorSettings,
    jobs: ControllerJobs,
}

impl PredictorController {
    /// Build a controller seeded from loaded settings.
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            ui: UiState::default(),
            inputs: settings.defaults.to_inputs(),
            estimator: settings.estimator.clone(),
            jobs: ControllerJobs::new(),
        }
    }

    /// Load settings from the app directory and build a controller.
    pub fn from_config() -> Result<Self, crate::config::ConfigError> {
        let settings = crate::config::load_or_default()?;
        Ok(Self::new(&settings))
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// The most recent published estimate, if the inputs have not changed since.
    pub fn prediction(&self) -> Option<f64> {
        self.ui.prediction.value()
    }

    pub fn is_loading(&self) -> bool {
        self.ui.prediction.is_loading()
    }

    pub fn estimate_delay(&self) -> Duration {
        self.estimator.delay()
    }

    pub fn set_estimate_delay(&mut self, delay: Duration) {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.estimator.delay_ms = millis.min(crate::config::MAX_DELAY_MS);
    }

    pub fn stale_results(&self) -> StaleResults {
        self.estimator.stale_results
    }

    pub fn set_stale_results(&mut self, policy: StaleResults) {
        self.estimator.stale_results = policy;
    }

    /// True while at least one estimation worker has not reported back.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.in_flight() > 0
    }

    /// Start an estimation for a snapshot of the current inputs.
    ///
    /// Loading is set immediately; the result is applied by
    /// [`Self::poll_background_jobs`] once the configured delay has elapsed.
    /// Returns the request id.
    pub fn request_prediction(&mut self) -> u64 {
        let request_id = self.jobs.next_request_id();
        let ticket = self.ui.prediction.begin(request_id);
        let inputs = self.inputs;
        tracing::info!(
            request_id,
            crop = %inputs.crop(),
            soil = %inputs.soil(),
            rainfall = inputs.rainfall(),
            temperature = inputs.temperature(),
            fertilizer = inputs.fertilizer(),
            "Yield estimate requested"
        );
        self.set_status(
            format!("Estimating {} yield on {} soil", inputs.crop(), inputs.soil()),
            StatusTone::Busy,
        );
        self.jobs.spawn_prediction(PredictionJob {
            ticket,
            inputs,
            delay: self.estimator.delay(),
        });
        request_id
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
