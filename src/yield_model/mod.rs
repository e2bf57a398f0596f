//! Crop, soil and growing-condition inputs plus the heuristic yield estimator.
//!
//! Everything here is UI-free so the controller, the benches and the tests can
//! share one implementation of the formula.

mod crop;
mod estimator;
mod inputs;

pub use crop::{Crop, Soil};
pub use estimator::{CropProfile, MAX_YIELD, MIN_YIELD, estimate, raw_estimate, round_to_tenth};
pub use inputs::{FERTILIZER_RANGE, FieldRange, Inputs, RAINFALL_RANGE, TEMPERATURE_RANGE};
