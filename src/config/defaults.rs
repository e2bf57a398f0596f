pub(super) fn default_delay_ms() -> u64 {
    800
}

pub(super) fn default_rainfall() -> f64 {
    500.0
}

pub(super) fn default_temperature() -> f64 {
    22.0
}

pub(super) fn default_fertilizer() -> f64 {
    120.0
}
