/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # request-sequencer
//!
//! Latest-issued-wins coordination for repeated asynchronous operations.
//!
//! When the same logical request is issued again before the first reply
//! arrives, only the most recently issued call is authoritative. A slow
//! earlier call that completes afterwards discards its own result and hands
//! its caller the outcome recorded by the later call, so every caller
//! observes one consistent "current" outcome.
//!
//! ## Modules
//!
//! - [`sequencer`]: the [`Sequencer`] primitive wrapping one operation
//! - [`registry`]: the [`Registry`] holding one sequencer per call signature,
//!   verb dispatch, and the [`Surface`] factory
//!
//! Superseded operations are never cancelled; their results are set aside.
//!
//! ## Example
//!
//! ```
//! use request_sequencer::Sequencer;
//! use std::time::Duration;
//!
//! async fn job((payload, delay_ms): (u32, u64)) -> Result<u32, String> {
//!     tokio::time::sleep(Duration::from_millis(delay_ms)).await;
//!     Ok(payload)
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let active = Sequencer::new(job);
//! let first = active.call((1, 40));
//! let second = active.call((2, 10));
//! let (first, second) = tokio::join!(first, second);
//!
//! // the first call finishes last and adopts the second call's payload
//! assert_eq!(first, Ok(2));
//! assert_eq!(second, Ok(2));
//! # }
//! ```

pub mod registry;
pub mod sequencer;

pub use registry::{FnTarget, Registry, RequestTarget, Surface, Verb, VerbTable, surface};
pub use sequencer::{
    CallError, FailurePolicy, Outcome, Sequencer, SequencerConfig, SequencerMode,
};
