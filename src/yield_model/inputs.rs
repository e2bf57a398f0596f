use super::crop::{Crop, Soil};

/// Bounds and step of one slider-controlled field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Annual rainfall in mm/year.
pub const RAINFALL_RANGE: FieldRange = FieldRange {
    min: 300.0,
    max: 1000.0,
    step: 10.0,
};

/// Mean growing temperature in °C.
pub const TEMPERATURE_RANGE: FieldRange = FieldRange {
    min: 15.0,
    max: 35.0,
    step: 0.5,
};

/// Fertilizer application rate in kg/ha.
pub const FERTILIZER_RANGE: FieldRange = FieldRange {
    min: 50.0,
    max: 200.0,
    step: 5.0,
};

impl FieldRange {
    /// Clamp into bounds and snap to the nearest step, measured from `min`.
    ///
    /// Returns `None` for NaN or infinite values.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        Some((self.min + steps * self.step).clamp(self.min, self.max))
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The five user-controlled fields feeding the estimator.
///
/// Numeric fields are private; setters clamp and snap so an instance is always
/// within slider bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    crop: Crop,
    soil: Soil,
    rainfall: f64,
    temperature: f64,
    fertilizer: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            crop: Crop::Wheat,
            soil: Soil::Loamy,
            rainfall: 500.0,
            temperature: 22.0,
            fertilizer: 120.0,
        }
    }
}

impl Inputs {
    /// Build inputs from raw values, normalizing each numeric field.
    ///
    /// Non-finite values fall back to the form defaults.
    pub fn new(crop: Crop, soil: Soil, rainfall: f64, temperature: f64, fertilizer: f64) -> Self {
        let mut inputs = Self {
            crop,
            soil,
            ..Self::default()
        };
        inputs.set_rainfall(rainfall);
        inputs.set_temperature(temperature);
        inputs.set_fertilizer(fertilizer);
        inputs
    }

    pub fn crop(&self) -> Crop {
        self.crop
    }

    pub fn soil(&self) -> Soil {
        self.soil
    }

    pub fn rainfall(&self) -> f64 {
        self.rainfall
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn fertilizer(&self) -> f64 {
        self.fertilizer
    }

    /// Returns true when the stored crop changed.
    pub fn set_crop(&mut self, crop: Crop) -> bool {
        replace_if_changed(&mut self.crop, crop)
    }

    /// Returns true when the stored soil changed.
    pub fn set_soil(&mut self, soil: Soil) -> bool {
        replace_if_changed(&mut self.soil, soil)
    }

    /// Returns true when the normalized rainfall differs from the stored one.
    pub fn set_rainfall(&mut self, value: f64) -> bool {
        set_bounded(&mut self.rainfall, value, &RAINFALL_RANGE)
    }

    /// Returns true when the normalized temperature differs from the stored one.
    pub fn set_temperature(&mut self, value: f64) -> bool {
        set_bounded(&mut self.temperature, value, &TEMPERATURE_RANGE)
    }

    /// Returns true when the normalized fertilizer rate differs from the stored one.
    pub fn set_fertilizer(&mut self, value: f64) -> bool {
        set_bounded(&mut self.fertilizer, value, &FERTILIZER_RANGE)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn set_bounded(slot: &mut f64, value: f64, range: &FieldRange) -> bool {
    match range.normalize(value) {
        Some(normalized) => replace_if_changed(slot, normalized),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form() {
        let inputs = Inputs::default();
        assert_eq!(inputs.crop(), Crop::Wheat);
        assert_eq!(inputs.soil(), Soil::Loamy);
        assert_eq!(inputs.rainfall(), 500.0);
        assert_eq!(inputs.temperature(), 22.0);
        assert_eq!(inputs.fertilizer(), 120.0);
    }

    #[test]
    fn setters_clamp_to_bounds() {
        let mut inputs = Inputs::default();
        assert!(inputs.set_rainfall(1234.0));
        assert_eq!(inputs.rainfall(), 1000.0);
        assert!(inputs.set_temperature(-4.0));
        assert_eq!(inputs.temperature(), 15.0);
        assert!(inputs.set_fertilizer(52.0));
        assert_eq!(inputs.fertilizer(), 50.0);
    }

    #[test]
    fn setters_snap_to_slider_step() {
        let mut inputs = Inputs::default();
        inputs.set_temperature(22.3);
        assert_eq!(inputs.temperature(), 22.5);
        inputs.set_rainfall(644.0);
        assert_eq!(inputs.rainfall(), 640.0);
        inputs.set_fertilizer(173.0);
        assert_eq!(inputs.fertilizer(), 175.0);
    }

    #[test]
    fn unchanged_values_report_no_change() {
        let mut inputs = Inputs::default();
        assert!(!inputs.set_crop(Crop::Wheat));
        assert!(!inputs.set_soil(Soil::Loamy));
        assert!(!inputs.set_rainfall(501.0));
        assert!(!inputs.set_temperature(f64::NAN));
        assert!(inputs.set_crop(Crop::Rice));
    }

    #[test]
    fn new_normalizes_raw_values() {
        let inputs = Inputs::new(Crop::Rice, Soil::Clay, 10.0, f64::INFINITY, 999.0);
        assert_eq!(inputs.rainfall(), 300.0);
        assert_eq!(inputs.temperature(), 22.0);
        assert_eq!(inputs.fertilizer(), 200.0);
        assert!(RAINFALL_RANGE.contains(inputs.rainfall()));
    }
}
