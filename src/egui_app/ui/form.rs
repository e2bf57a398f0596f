use super::style;
use super::*;
use crate::egui_app::view_model;
use crate::yield_model::{Crop, FieldRange, FERTILIZER_RANGE, RAINFALL_RANGE, Soil, TEMPERATURE_RANGE};
use eframe::egui::{Button, ComboBox, RichText, Slider, SliderClamping, Ui};

impl PredictorApp {
    pub(super) fn render_form(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let inputs = *self.controller.inputs();

        field_label(ui, view_model::CROP_LABEL);
        let mut crop = inputs.crop();
        ComboBox::from_id_salt("crop_combo")
            .width(FORM_WIDTH)
            .selected_text(crop.label())
            .show_ui(ui, |ui| {
                for option in Crop::ALL {
                    ui.selectable_value(&mut crop, option, option.label());
                }
            });
        self.controller.set_crop(crop);
        ui.add_space(12.0);

        field_label(ui, view_model::SOIL_LABEL);
        let mut soil = inputs.soil();
        ComboBox::from_id_salt("soil_combo")
            .width(FORM_WIDTH)
            .selected_text(soil.label())
            .show_ui(ui, |ui| {
                for option in Soil::ALL {
                    ui.selectable_value(&mut soil, option, option.label());
                }
            });
        self.controller.set_soil(soil);
        ui.add_space(12.0);

        field_label(ui, &view_model::rainfall_label(inputs.rainfall()));
        if let Some(value) = range_slider(ui, inputs.rainfall(), &RAINFALL_RANGE) {
            self.controller.set_rainfall(value);
        }
        ui.add_space(12.0);

        field_label(ui, &view_model::temperature_label(inputs.temperature()));
        if let Some(value) = range_slider(ui, inputs.temperature(), &TEMPERATURE_RANGE) {
            self.controller.set_temperature(value);
        }
        ui.add_space(12.0);

        field_label(ui, &view_model::fertilizer_label(inputs.fertilizer()));
        if let Some(value) = range_slider(ui, inputs.fertilizer(), &FERTILIZER_RANGE) {
            self.controller.set_fertilizer(value);
        }
        ui.add_space(16.0);

        let button = Button::new(
            RichText::new(view_model::PREDICT_BUTTON)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(palette.accent)
        .min_size(egui::vec2(FORM_WIDTH, 32.0));
        if ui.add(button).clicked() {
            self.controller.request_prediction();
        }
    }
}

fn field_label(ui: &mut Ui, text: &str) {
    let palette = style::palette();
    ui.label(RichText::new(text).size(13.0).color(palette.text_primary));
    ui.add_space(4.0);
}

/// Returns the new value when the user moved the slider.
fn range_slider(ui: &mut Ui, current: f64, range: &FieldRange) -> Option<f64> {
    let mut value = current;
    let slider = Slider::new(&mut value, range.min..=range.max)
        .step_by(range.step)
        .show_value(false)
        .clamping(SliderClamping::Always);
    ui.spacing_mut().slider_width = FORM_WIDTH;
    ui.add(slider).changed().then_some(value)
}
