use crate::egui_app::state::RequestTicket;
use crate::yield_model::{self, Inputs};
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
    time::{Duration, Instant},
};

pub(crate) enum JobMessage {
    PredictionReady(PredictionResult),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PredictionJob {
    pub(super) ticket: RequestTicket,
    pub(super) inputs: Inputs,
    pub(super) delay: Duration,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) ticket: RequestTicket,
    pub(crate) inputs: Inputs,
    pub(crate) value: f64,
    pub(crate) elapsed: Duration,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    in_flight: usize,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            in_flight: 0,
        }
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        id
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(super) fn try_recv_message(&mut self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        match &message {
            JobMessage::PredictionReady(_) => {
                self.in_flight = self.in_flight.saturating_sub(1);
            }
        }
        Ok(message)
    }

    /// Run the estimator on a worker thread after the job's delay.
    ///
    /// The sleep is not cancelable. If no thread can be spawned the estimate
    /// is computed inline and delivered on the next poll.
    pub(super) fn spawn_prediction(&mut self, job: PredictionJob) {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        let started = Instant::now();
        let spawned = thread::Builder::new()
            .name(format!("yield-estimate-{}", job.ticket.request_id))
            .spawn(move || {
                thread::sleep(job.delay);
                let _ = tx.send(run_prediction(job, started));
            });
        if let Err(err) = spawned {
            tracing::warn!("Failed to spawn estimate worker, running inline: {err}");
            let _ = self.message_tx.send(run_prediction(job, started));
        }
    }
}

fn run_prediction(job: PredictionJob, started: Instant) -> JobMessage {
    JobMessage::PredictionReady(PredictionResult {
        ticket: job.ticket,
        inputs: job.inputs,
        value: yield_model::estimate(&job.inputs),
        elapsed: started.elapsed(),
    })
}
