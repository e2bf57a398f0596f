//! egui renderer for the predictor form.

mod form;
mod result_panel;
mod status_bar;
pub mod style;
mod update;

use crate::egui_app::controller::PredictorController;
use eframe::egui;

/// Smallest window size that fits the whole form without scrolling.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(420.0, 560.0);
/// Form column width.
const FORM_WIDTH: f32 = 380.0;

/// Renders the form using the shared controller state.
pub struct PredictorApp {
    controller: PredictorController,
    visuals_set: bool,
}

impl PredictorApp {
    /// Create the app, loading persisted settings from the app directory.
    pub fn new() -> Result<Self, String> {
        let controller = PredictorController::from_config()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self::with_controller(controller))
    }

    pub fn with_controller(controller: PredictorController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}
