//! Worker thread plumbing shared by the engines.
//!
//! A job runs on its own thread and sends exactly one [`SearchReport`] back
//! over an mpsc channel. If the thread dies first the sender is dropped and
//! the worker reports `EngineThreadFailed` instead of hanging.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::chess_errors::ChessErrors;
use crate::engines::chess_engine_thread_trait::SearchReport;

#[derive(Debug, Default)]
enum WorkerState {
    #[default]
    Idle,
    Running {
        receiver: Receiver<SearchReport>,
        handle: JoinHandle<()>,
    },
    Finished(SearchReport),
    Failed,
}

#[derive(Debug, Default)]
pub struct EngineWorker {
    state: WorkerState,
}

impl EngineWorker {
    /// Starts `job` on a new thread, dropping any earlier result.
    pub fn spawn<F>(&mut self, thread_name: &str, job: F) -> Result<(), ChessErrors>
    where
        F: FnOnce() -> SearchReport + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::Builder::new()
            .name(thread_name.to_owned())
            .spawn(move || {
                let report = job();
                // The receiving side may already be gone if the engine was dropped.
                let _ = sender.send(report);
            })
            .map_err(|error| {
                tracing::error!(%error, "failed to spawn engine thread");
                ChessErrors::EngineThreadFailed
            })?;
        self.state = WorkerState::Running { receiver, handle };
        Ok(())
    }

    /// Forgets any running or finished job. A running thread is detached.
    pub fn reset(&mut self) {
        self.state = WorkerState::Idle;
    }

    /// Non-blocking check; moves a delivered report into place.
    pub fn poll(&mut self) -> bool {
        let WorkerState::Running { receiver, .. } = &self.state else {
            return matches!(self.state, WorkerState::Finished(_) | WorkerState::Failed);
        };
        let outcome = match receiver.try_recv() {
            Ok(report) => Some(report),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => None,
        };
        self.finish(outcome);
        true
    }

    /// Blocks until the job has reported.
    pub fn wait(&mut self) -> Result<&SearchReport, ChessErrors> {
        if let WorkerState::Running { receiver, .. } = &self.state {
            let outcome = receiver.recv().ok();
            self.finish(outcome);
        }
        match &self.state {
            WorkerState::Finished(report) => Ok(report),
            WorkerState::Failed => Err(ChessErrors::EngineThreadFailed),
            WorkerState::Idle | WorkerState::Running { .. } => Err(ChessErrors::EngineNotStarted),
        }
    }

    pub fn report(&self) -> Option<&SearchReport> {
        match &self.state {
            WorkerState::Finished(report) => Some(report),
            _ => None,
        }
    }

    fn finish(&mut self, outcome: Option<SearchReport>) {
        let previous = std::mem::take(&mut self.state);
        if let WorkerState::Running { handle, .. } = previous {
            if handle.join().is_err() {
                tracing::error!("engine thread panicked");
            }
        }
        self.state = match outcome {
            Some(report) => WorkerState::Finished(report),
            None => WorkerState::Failed,
        };
    }
}
