use super::*;
use crate::yield_model::{Crop, Soil};

impl PredictorController {
    pub fn set_crop(&mut self, crop: Crop) {
        let changed = self.inputs.set_crop(crop);
        self.apply_input_change("crop", changed);
    }

    pub fn set_soil(&mut self, soil: Soil) {
        let changed = self.inputs.set_soil(soil);
        self.apply_input_change("soil", changed);
    }

    /// Values are clamped to 300..=1000 and snapped to steps of 10.
    pub fn set_rainfall(&mut self, rainfall: f64) {
        let changed = self.inputs.set_rainfall(rainfall);
        self.apply_input_change("rainfall", changed);
    }

    /// Values are clamped to 15..=35 and snapped to steps of 0.5.
    pub fn set_temperature(&mut self, temperature: f64) {
        let changed = self.inputs.set_temperature(temperature);
        self.apply_input_change("temperature", changed);
    }

    /// Values are clamped to 50..=200 and snapped to steps of 5.
    pub fn set_fertilizer(&mut self, fertilizer: f64) {
        let changed = self.inputs.set_fertilizer(fertilizer);
        self.apply_input_change("fertilizer", changed);
    }

    /// Every input edit funnels through here so the prediction is cleared
    /// before any pending result can be polled.
    fn apply_input_change(&mut self, field: &'static str, changed: bool) {
        if !changed {
            return;
        }
        tracing::debug!(field, inputs = ?self.inputs, "Input changed");
        self.ui.prediction.invalidate();
    }
}
