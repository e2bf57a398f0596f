use super::jobs::{JobMessage, PredictionResult};
use super::*;
use crate::egui_app::state::CompletionOutcome;
use crate::egui_app::view_model;
use std::sync::mpsc::TryRecvError;

impl PredictorController {
    /// Drain finished estimation jobs and apply them in arrival order.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::PredictionReady(result) => self.apply_prediction_result(result),
            }
        }
    }

    fn apply_prediction_result(&mut self, result: PredictionResult) {
        let policy = self.estimator.stale_results;
        let outcome = self.ui.prediction.complete(result.ticket, result.value, policy);
        match outcome {
            CompletionOutcome::Published => {
                tracing::info!(
                    request_id = result.ticket.request_id,
                    value = result.value,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "Yield estimate published"
                );
                self.set_status(
                    format!(
                        "{} on {} soil: {} tonnes/hectare",
                        result.inputs.crop(),
                        result.inputs.soil(),
                        view_model::format_number(result.value)
                    ),
                    StatusTone::Info,
                );
            }
            CompletionOutcome::Discarded => {
                tracing::warn!(
                    request_id = result.ticket.request_id,
                    value = result.value,
                    "Discarded stale yield estimate"
                );
                if !self.ui.prediction.is_loading() && self.ui.prediction.value().is_none() {
                    self.set_status(
                        "Inputs changed during the estimate; press Predict Yield again",
                        StatusTone::Warning,
                    );
                }
            }
        }
    }
}
