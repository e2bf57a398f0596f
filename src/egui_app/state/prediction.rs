use crate::config::StaleResults;

/// Identifies one estimation request and the input generation it captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub request_id: u64,
    pub input_epoch: u64,
}

/// What happened to a completed estimation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    Published,
    Discarded,
}

/// Derived prediction value plus the loading flag.
///
/// The value is cleared on every input change. `input_epoch` counts those
/// changes so a completion can tell whether its captured inputs are current.
#[derive(Clone, Debug, Default)]
pub struct PredictionState {
    value: Option<f64>,
    loading: bool,
    latest_request: Option<u64>,
    input_epoch: u64,
}

impl PredictionState {
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The result panel is only shown for a finished, still-valid estimate.
    pub fn shows_result(&self) -> bool {
        self.value.is_some() && !self.loading
    }

    pub fn input_epoch(&self) -> u64 {
        self.input_epoch
    }

    /// Clear the prediction after an input change. Loading is left as is.
    pub fn invalidate(&mut self) {
        self.value = None;
        self.input_epoch = self.input_epoch.wrapping_add(1);
    }

    /// Mark a new request as in flight and return its ticket.
    pub fn begin(&mut self, request_id: u64) -> RequestTicket {
        self.loading = true;
        self.latest_request = Some(request_id);
        RequestTicket {
            request_id,
            input_epoch: self.input_epoch,
        }
    }

    /// Apply a finished estimate according to the stale-result policy.
    ///
    /// With `Keep` every completion publishes, so the last one to arrive wins.
    /// With `Discard` only the latest request publishes, and only while its
    /// captured inputs are still current.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        value: f64,
        policy: StaleResults,
    ) -> CompletionOutcome {
        match policy {
            StaleResults::Keep => {
                self.publish(value);
                CompletionOutcome::Published
            }
            StaleResults::Discard => {
                if self.latest_request != Some(ticket.request_id) {
                    return CompletionOutcome::Discarded;
                }
                if ticket.input_epoch != self.input_epoch {
                    self.loading = false;
                    return CompletionOutcome::Discarded;
                }
                self.publish(value);
                CompletionOutcome::Published
            }
        }
    }

    fn publish(&mut self, value: f64) {
        self.value = Some(value);
        self.loading = false;
    }
}
