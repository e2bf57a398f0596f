//! Display strings for the form and the result panel.

use crate::egui_app::state::PredictionState;

pub const TITLE: &str = "Crop Yield Predictor";
pub const CROP_LABEL: &str = "Crop Type";
pub const SOIL_LABEL: &str = "Soil Type";
pub const PREDICT_BUTTON: &str = "Predict Yield";
pub const LOADING_TEXT: &str = "Calculating prediction...";
pub const RESULT_HEADING: &str = "Prediction Results";
pub const RESULT_NOTE: &str = "This prediction is based on the crop type, growing conditions, \
     and fertilizer application rate you specified.";

/// Shortest decimal form: `500`, `22.5`, `3.7`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

pub fn rainfall_label(rainfall: f64) -> String {
    format!("Rainfall (mm/year): {}", format_number(rainfall))
}

pub fn temperature_label(temperature: f64) -> String {
    format!("Temperature (°C): {}", format_number(temperature))
}

pub fn fertilizer_label(fertilizer: f64) -> String {
    format!("Fertilizer (kg/ha): {}", format_number(fertilizer))
}

pub fn expected_yield_text(value: f64) -> String {
    format!("Expected Yield: {} tonnes/hectare", format_number(value))
}

/// What the area below the button shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultPanelView {
    Hidden,
    Loading,
    Result { headline: String },
}

impl ResultPanelView {
    pub fn from_state(state: &PredictionState) -> Self {
        if state.is_loading() {
            return Self::Loading;
        }
        match state.value() {
            Some(value) => Self::Result {
                headline: expected_yield_text(value),
            },
            None => Self::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaleResults;

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(22.5), "22.5");
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(3.7), "3.7");
    }

    #[test]
    fn slider_labels_include_units() {
        assert_eq!(rainfall_label(640.0), "Rainfall (mm/year): 640");
        assert_eq!(temperature_label(22.5), "Temperature (°C): 22.5");
        assert_eq!(fertilizer_label(120.0), "Fertilizer (kg/ha): 120");
    }

    #[test]
    fn panel_follows_prediction_state() {
        let mut state = PredictionState::default();
        assert_eq!(ResultPanelView::from_state(&state), ResultPanelView::Hidden);

        let ticket = state.begin(1);
        assert_eq!(ResultPanelView::from_state(&state), ResultPanelView::Loading);

        state.complete(ticket, 3.7, StaleResults::Keep);
        assert_eq!(
            ResultPanelView::from_state(&state),
            ResultPanelView::Result {
                headline: "Expected Yield: 3.7 tonnes/hectare".into()
            }
        );

        state.invalidate();
        assert_eq!(ResultPanelView::from_state(&state), ResultPanelView::Hidden);
    }

    #[test]
    fn loading_hides_a_present_value() {
        let mut state = PredictionState::default();
        let ticket = state.begin(1);
        state.complete(ticket, 3.7, StaleResults::Keep);
        state.begin(2);
        assert_eq!(state.value(), Some(3.7));
        assert_eq!(ResultPanelView::from_state(&state), ResultPanelView::Loading);
    }
}
