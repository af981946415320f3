/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Sequencer module for latest-issued-wins ordering of repeated calls.
//!
//! This module provides a [`Sequencer`] that wraps one asynchronous
//! operation. Calls are ordered by the moment they are issued rather than
//! the moment they complete: a slow earlier call that finishes after a later
//! one discards its own result and adopts the outcome recorded by the most
//! recently issued call.
//!
//! # Architecture
//!
//! - Each call takes a monotonic call number when it is issued
//! - The call number and the recorded outcome live behind one lock
//! - A completing call compares its number with the latest issued number
//! - Current successes are recorded; superseded calls adopt the record
//! - Payloads are handed out as JSON round-trip copies
//!
//! # Examples
//!
//! ```
//! use request_sequencer::sequencer::{Sequencer, SequencerMode};
//!
//! async fn fetch(id: u32) -> Result<String, String> {
//!     Ok(format!("user-{id}"))
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sequencer = Sequencer::new(fetch);
//! assert_eq!(sequencer.call(7).await, Ok(String::from("user-7")));
//!
//! sequencer.toggle();
//! assert_eq!(sequencer.mode(), SequencerMode::Disabled);
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod mode;
pub mod outcome;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-export main types
pub use config::{FailurePolicy, SequencerConfig};
pub use core::{CallFuture, OperationFn, OperationFuture, Sequencer};
pub use error::CallError;
pub use mode::SequencerMode;
pub use outcome::Outcome;
pub use snapshot::{Payload, deep_copy};
