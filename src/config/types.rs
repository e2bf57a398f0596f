use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults::{default_delay_ms, default_fertilizer, default_rainfall, default_temperature};
use crate::yield_model::{Crop, Inputs, Soil};

/// Upper bound for the simulated estimator latency.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Settings persisted in `config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub estimator: EstimatorSettings,
    #[serde(default)]
    pub defaults: InputDefaults,
}

impl AppSettings {
    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn normalized(mut self) -> Self {
        self.estimator.delay_ms = self.estimator.delay_ms.min(MAX_DELAY_MS);
        self.defaults = InputDefaults::from(self.defaults.to_inputs());
        self
    }
}

/// How the estimator wrapper behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    /// Simulated latency between a request and its published result.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub stale_results: StaleResults,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            stale_results: StaleResults::default(),
        }
    }
}

impl EstimatorSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// What to do with a result whose request is no longer the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResults {
    /// Publish every completion; the last one to finish wins.
    #[default]
    Keep,
    /// Drop completions superseded by a newer request or an input change.
    Discard,
}

/// Form values shown at launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default)]
    pub crop: Crop,
    #[serde(default)]
    pub soil: Soil,
    #[serde(default = "default_rainfall")]
    pub rainfall: f64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_fertilizer")]
    pub fertilizer: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self::from(Inputs::default())
    }
}

impl InputDefaults {
    /// Build bounded inputs, clamping and snapping each numeric field.
    pub fn to_inputs(&self) -> Inputs {
        Inputs::new(
            self.crop,
            self.soil,
            self.rainfall,
            self.temperature,
            self.fertilizer,
        )
    }
}

impl From<Inputs> for InputDefaults {
    fn from(inputs: Inputs) -> Self {
        Self {
            crop: inputs.crop(),
            soil: inputs.soil(),
            rainfall: inputs.rainfall(),
            temperature: inputs.temperature(),
            fertilizer: inputs.fertilizer(),
        }
    }
}
