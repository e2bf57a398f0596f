use super::style;
use super::*;
use crate::egui_app::view_model::{self, ResultPanelView};
use eframe::egui::{Frame, Margin, RichText, Ui};

impl PredictorApp {
    pub(super) fn render_result_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        match ResultPanelView::from_state(&self.controller.ui.prediction) {
            ResultPanelView::Hidden => {}
            ResultPanelView::Loading => {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(view_model::LOADING_TEXT).color(palette.text_muted));
                });
            }
            ResultPanelView::Result { headline } => {
                ui.add_space(16.0);
                Frame::new()
                    .fill(palette.result_fill)
                    .stroke(style::result_stroke())
                    .corner_radius(6.0)
                    .inner_margin(Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_width(FORM_WIDTH - 32.0);
                        ui.label(
                            RichText::new(view_model::RESULT_HEADING)
                                .size(17.0)
                                .strong()
                                .color(palette.result_heading),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(headline)
                                .size(20.0)
                                .strong()
                                .color(palette.heading),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(view_model::RESULT_NOTE)
                                .size(12.0)
                                .color(palette.text_muted),
                        );
                    });
            }
        }
    }
}
