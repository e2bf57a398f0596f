use super::style;
use super::*;
use crate::egui_app::view_model;
use eframe::egui::{Frame, Margin, RichText};
use std::time::Duration;

/// Poll interval while an estimate is in flight.
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(30);

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_status(ctx);
        self.render_card(ctx);
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(JOB_POLL_INTERVAL);
        }
    }
}

impl PredictorApp {
    fn render_card(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::new()
                        .fill(palette.bg_card)
                        .stroke(style::card_stroke())
                        .corner_radius(12.0)
                        .inner_margin(Margin::same(24))
                        .show(ui, |ui| {
                            ui.set_width(FORM_WIDTH);
                            ui.vertical(|ui| {
                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        RichText::new(view_model::TITLE)
                                            .size(24.0)
                                            .strong()
                                            .color(palette.heading),
                                    );
                                });
                                ui.add_space(20.0);
                                self.render_form(ui);
                                self.render_result_panel(ui);
                            });
                        });
                });
            });
        });
    }
}
