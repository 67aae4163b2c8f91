//! Background generation worker using a shared thread and channels.
//!
//! All generation requests run on a single shared worker thread, started
//! lazily on first use. Each request gets its own response channel, so
//! completed work is picked up by polling a [`WorkHandle`] rather than by
//! blocking — callers that do want to block can use [`WorkHandle::wait`].

use std::sync::{OnceLock, mpsc};

use derive_more::{Display, Error};
use sudocarve_generator::{Difficulty, GenerateError, GeneratedPuzzle, PuzzleGenerator};

use crate::CancelToken;

/// An error produced while scheduling or receiving background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DispatchError {
    /// The request's [`CancelToken`] was cancelled before the result could
    /// be delivered.
    #[display("generation request was cancelled")]
    Cancelled,
    /// The background worker thread is gone.
    #[display("background worker disconnected")]
    WorkerDisconnected,
    /// Generation itself failed.
    #[display("puzzle generation failed")]
    Generation(GenerateError),
}

struct WorkRequestEnvelope {
    difficulty: Difficulty,
    token: CancelToken,
    response_tx: mpsc::Sender<Result<GeneratedPuzzle, DispatchError>>,
}

// Shared worker thread sender reused across requests.
static WORKER_SENDER: OnceLock<mpsc::Sender<WorkRequestEnvelope>> = OnceLock::new();

fn worker_sender() -> &'static mpsc::Sender<WorkRequestEnvelope> {
    WORKER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        std::thread::spawn(move || {
            let generator = PuzzleGenerator::new();
            while let Ok(envelope) = rx.recv() {
                let response = handle_request(&generator, &envelope);
                let _ = envelope.response_tx.send(response);
            }
        });
        tx
    })
}

fn handle_request(
    generator: &PuzzleGenerator,
    envelope: &WorkRequestEnvelope,
) -> Result<GeneratedPuzzle, DispatchError> {
    if envelope.token.is_cancelled() {
        log::debug!("skipping cancelled {} request", envelope.difficulty);
        return Err(DispatchError::Cancelled);
    }

    log::debug!("generating {} puzzle in background", envelope.difficulty);
    let result = generator
        .generate(envelope.difficulty)
        .map_err(DispatchError::Generation);

    // A cancellation that raced the synchronous generation call discards
    // the finished puzzle; the caller was promised no late results.
    if envelope.token.is_cancelled() {
        log::debug!("discarding result of cancelled {} request", envelope.difficulty);
        return Err(DispatchError::Cancelled);
    }
    result
}

/// A handle for polling the completion of one generation request.
pub struct WorkHandle {
    difficulty: Difficulty,
    receiver: mpsc::Receiver<Result<GeneratedPuzzle, DispatchError>>,
}

impl std::fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkHandle")
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

impl WorkHandle {
    /// Returns the difficulty this handle's request was enqueued at.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attempts to collect the completed response without blocking.
    ///
    /// Returns `None` while the request is still in flight.
    pub fn poll(&mut self) -> Option<Result<GeneratedPuzzle, DispatchError>> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(DispatchError::WorkerDisconnected)),
        }
    }

    /// Blocks until the response arrives.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Cancelled`] if the request's token was
    /// cancelled, [`DispatchError::Generation`] if generation failed, or
    /// [`DispatchError::WorkerDisconnected`] if the worker thread died.
    pub fn wait(self) -> Result<GeneratedPuzzle, DispatchError> {
        self.receiver
            .recv()
            .map_err(|_| DispatchError::WorkerDisconnected)?
    }
}

/// Enqueues a generation request on the shared worker thread.
///
/// The request is cancelled by cancelling `token`; see [`CancelToken`] for
/// the granularity contract.
///
/// # Errors
///
/// Returns [`DispatchError::WorkerDisconnected`] if the worker thread has
/// terminated.
pub fn enqueue(difficulty: Difficulty, token: CancelToken) -> Result<WorkHandle, DispatchError> {
    let (response_tx, response_rx) = mpsc::channel();
    worker_sender()
        .send(WorkRequestEnvelope {
            difficulty,
            token,
            response_tx,
        })
        .map_err(|_| DispatchError::WorkerDisconnected)?;

    Ok(WorkHandle {
        difficulty,
        receiver: response_rx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_a_request() {
        let handle = enqueue(Difficulty::Easy, CancelToken::new()).unwrap();
        let puzzle = handle.wait().unwrap();
        assert_eq!(puzzle.difficulty, Difficulty::Easy);
        assert!(puzzle.solution.is_complete_valid());
        assert!(puzzle.problem.hole_count() <= Difficulty::Easy.hole_target());
    }

    #[test]
    fn cancelled_before_start_yields_no_result() {
        let token = CancelToken::new();
        token.cancel();
        let handle = enqueue(Difficulty::Hard, token).unwrap();
        assert_eq!(handle.wait(), Err(DispatchError::Cancelled));
    }

    #[test]
    fn poll_reports_pending_then_done() {
        let mut handle = enqueue(Difficulty::Easy, CancelToken::new()).unwrap();
        let response = loop {
            if let Some(response) = handle.poll() {
                break response;
            }
            std::thread::yield_now();
        };
        assert!(response.is_ok());
    }

    #[test]
    fn requests_run_independently() {
        let a = enqueue(Difficulty::Easy, CancelToken::new()).unwrap();
        let b = enqueue(Difficulty::Medium, CancelToken::new()).unwrap();
        assert_eq!(a.difficulty(), Difficulty::Easy);
        let a = a.wait().unwrap();
        let b = b.wait().unwrap();
        assert_eq!(a.difficulty, Difficulty::Easy);
        assert_eq!(b.difficulty, Difficulty::Medium);
    }
}
