//! Cancellation signal for pending generation requests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A cloneable cancellation flag shared between a caller and the worker.
///
/// Cancellation is cooperative and coarse-grained: the worker checks the
/// token before starting a request and again before delivering its result.
/// A request cancelled in between still runs to completion internally, but
/// its result is discarded and the caller sees
/// [`DispatchError::Cancelled`](crate::DispatchError::Cancelled). No partial
/// results are ever delivered.
///
/// # Examples
///
/// ```
/// use sudocarve_pool::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token.
    ///
    /// Cancellation is permanent; there is no way to reset a token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if any clone of this token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
