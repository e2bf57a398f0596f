use super::crop::{Crop, Soil};
use super::inputs::Inputs;

/// Lower bound applied to the summed estimate, in tonnes/hectare.
pub const MIN_YIELD: f64 = 1.5;
/// Upper bound applied to the summed estimate, in tonnes/hectare.
pub const MAX_YIELD: f64 = 5.5;

/// Per-crop constants for the piecewise-linear heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropProfile {
    pub base_yield: f64,
    pub optimal_rainfall: f64,
    pub rainfall_weight: f64,
    pub optimal_temperature: f64,
    pub temperature_weight: f64,
    /// Fertilizer rate at which the fertilizer term is zero.
    pub fertilizer_baseline: f64,
}

/// Distance from optimum at which the rainfall term crosses zero.
const RAINFALL_TOLERANCE: f64 = 200.0;
/// Distance from optimum at which the temperature term crosses zero.
const TEMPERATURE_TOLERANCE: f64 = 5.0;
const FERTILIZER_SCALE: f64 = 100.0;

const WHEAT: CropProfile = CropProfile {
    base_yield: 2.7,
    optimal_rainfall: 500.0,
    rainfall_weight: 0.3,
    optimal_temperature: 22.0,
    temperature_weight: 0.3,
    fertilizer_baseline: 100.0,
};

const RICE: CropProfile = CropProfile {
    base_yield: 4.3,
    optimal_rainfall: 800.0,
    rainfall_weight: 0.4,
    optimal_temperature: 26.0,
    temperature_weight: 0.3,
    fertilizer_baseline: 140.0,
};

impl CropProfile {
    pub fn for_crop(crop: Crop) -> &'static CropProfile {
        match crop {
            Crop::Wheat => &WHEAT,
            Crop::Rice => &RICE,
        }
    }

    pub fn soil_adjustment(crop: Crop, soil: Soil) -> f64 {
        match (crop, soil) {
            (Crop::Wheat, Soil::Loamy) => 0.2,
            (Crop::Wheat, Soil::Sandy) => -0.2,
            (Crop::Rice, Soil::Clay) => 0.3,
            (Crop::Rice, Soil::Sandy) => -0.5,
            (Crop::Wheat, Soil::Clay) | (Crop::Rice, Soil::Loamy) => 0.0,
        }
    }

    /// Negative once rainfall is further than the tolerance from optimum.
    pub fn rainfall_adjustment(&self, rainfall: f64) -> f64 {
        (1.0 - (rainfall - self.optimal_rainfall).abs() / RAINFALL_TOLERANCE)
            * self.rainfall_weight
    }

    pub fn temperature_adjustment(&self, temperature: f64) -> f64 {
        (1.0 - (temperature - self.optimal_temperature).abs() / TEMPERATURE_TOLERANCE)
            * self.temperature_weight
    }

    pub fn fertilizer_adjustment(&self, fertilizer: f64) -> f64 {
        (fertilizer - self.fertilizer_baseline) / FERTILIZER_SCALE
    }
}

/// Sum of all terms before clamping and rounding.
///
/// Individual terms are not clamped and may be negative.
pub fn raw_estimate(inputs: &Inputs) -> f64 {
    let profile = CropProfile::for_crop(inputs.crop());
    let mut total = profile.base_yield;
    total += CropProfile::soil_adjustment(inputs.crop(), inputs.soil());
    total += profile.rainfall_adjustment(inputs.rainfall());
    total += profile.temperature_adjustment(inputs.temperature());
    total += profile.fertilizer_adjustment(inputs.fertilizer());
    total
}

/// Estimated yield in tonnes/hectare, clamped to `[MIN_YIELD, MAX_YIELD]` and
/// rounded to one decimal place.
pub fn estimate(inputs: &Inputs) -> f64 {
    round_to_tenth(raw_estimate(inputs).clamp(MIN_YIELD, MAX_YIELD))
}

/// Round half-up at 0.1 granularity.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yield_model::{FERTILIZER_RANGE, RAINFALL_RANGE, TEMPERATURE_RANGE};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn steps(range: crate::yield_model::FieldRange) -> impl Iterator<Item = f64> {
        let count = ((range.max - range.min) / range.step).round() as usize;
        (0..=count).map(move |i| range.min + i as f64 * range.step)
    }

    #[test]
    fn wheat_at_optimum_with_moderate_fertilizer() {
        let inputs = Inputs::new(Crop::Wheat, Soil::Loamy, 500.0, 22.0, 120.0);
        assert!(approx(raw_estimate(&inputs), 3.7));
        assert_eq!(estimate(&inputs), 3.7);
    }

    #[test]
    fn rice_on_sandy_soil_at_optimum() {
        let inputs = Inputs::new(Crop::Rice, Soil::Sandy, 800.0, 26.0, 140.0);
        assert_eq!(estimate(&inputs), 4.5);
    }

    #[test]
    fn negative_terms_are_summed_before_clamping() {
        let inputs = Inputs::new(Crop::Wheat, Soil::Sandy, 1000.0, 35.0, 50.0);
        let profile = CropProfile::for_crop(Crop::Wheat);
        assert!(approx(profile.rainfall_adjustment(1000.0), -0.45));
        assert!(approx(profile.temperature_adjustment(35.0), -0.48));
        assert!(approx(raw_estimate(&inputs), 1.07));
        assert_eq!(estimate(&inputs), MIN_YIELD);
    }

    #[test]
    fn clamps_to_upper_bound() {
        let inputs = Inputs::new(Crop::Rice, Soil::Clay, 800.0, 26.0, 200.0);
        assert!(raw_estimate(&inputs) > MAX_YIELD);
        assert_eq!(estimate(&inputs), MAX_YIELD);
    }

    #[test]
    fn clay_is_neutral_for_wheat_and_loamy_for_rice() {
        assert_eq!(CropProfile::soil_adjustment(Crop::Wheat, Soil::Clay), 0.0);
        assert_eq!(CropProfile::soil_adjustment(Crop::Rice, Soil::Loamy), 0.0);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(2.24), 2.2);
        assert_eq!(round_to_tenth(1.5), 1.5);
    }

    #[test]
    fn every_slider_position_yields_bounded_tenths() {
        for crop in Crop::ALL {
            for soil in Soil::ALL {
                for rainfall in steps(RAINFALL_RANGE).step_by(7) {
                    for temperature in steps(TEMPERATURE_RANGE) {
                        for fertilizer in steps(FERTILIZER_RANGE) {
                            let inputs =
                                Inputs::new(crop, soil, rainfall, temperature, fertilizer);
                            let value = estimate(&inputs);
                            assert!((MIN_YIELD..=MAX_YIELD).contains(&value), "{value}");
                            let tenths = value * 10.0;
                            assert!(approx(tenths, tenths.round()), "{value}");
                        }
                    }
                }
            }
        }
    }
}
