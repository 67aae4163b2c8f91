//! Background puzzle generation with pooling and cancellation.
//!
//! Puzzle generation is CPU-bound, so callers that cannot afford to block
//! offload it here:
//!
//! - [`dispatcher`]: a shared background worker thread that runs generation
//!   requests and reports results through poll-based [`WorkHandle`]s. A
//!   [`CancelToken`] lets the caller abandon a request; the core generation
//!   call itself is synchronous and never observes cancellation mid-search,
//!   so cancellation takes effect at request granularity.
//! - [`pool`]: a difficulty-keyed stock of pre-generated puzzles, refilled
//!   in the background so an interactive caller can start a new game
//!   without waiting.
//!
//! # Examples
//!
//! ```no_run
//! use sudocarve_generator::Difficulty;
//! use sudocarve_pool::{CancelToken, dispatcher};
//!
//! let token = CancelToken::new();
//! let handle = dispatcher::enqueue(Difficulty::Medium, token.clone())?;
//!
//! // ... later, either poll the handle or give up:
//! token.cancel();
//! # Ok::<(), sudocarve_pool::DispatchError>(())
//! ```

pub mod cancel;
pub mod dispatcher;
pub mod pool;

pub use self::{
    cancel::CancelToken,
    dispatcher::{DispatchError, WorkHandle},
    pool::PuzzlePool,
};
