//! Shared state types for the egui UI.

mod prediction;
mod status;

pub use prediction::{CompletionOutcome, PredictionState, RequestTicket};
pub use status::StatusBarState;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub prediction: PredictionState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            prediction: PredictionState::default(),
        }
    }
}
