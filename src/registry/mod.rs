/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Keyed registry of sequencers.
//!
//! This module maps every distinct call signature (a verb or direct-call
//! signature plus its arguments) to its own [`Sequencer`](crate::sequencer::Sequencer),
//! so repeated identical calls share recency state while different calls
//! never interfere.
//!
//! # Architecture
//!
//! - A signature that names a [`Verb`] dispatches to the target's member
//! - Any other signature calls the target directly
//! - The digest of `[signature, ...args]` selects the sequencer
//! - Sequencers are created lazily and never evicted
//! - Calls whose digest cannot be derived bypass sequencing
//!
//! # Examples
//!
//! ```
//! use request_sequencer::registry::{Verb, VerbTable, surface};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let api = surface(
//!     VerbTable::new()
//!         .on(Verb::Get, |url: String| async move { Ok::<_, String>(format!("GET {url}")) })
//!         .direct(|url: String, body: String| async move {
//!             Ok::<_, String>(format!("{url} <- {body}"))
//!         }),
//! );
//!
//! assert_eq!(api.get(String::from("/a")).await, Ok(String::from("GET /a")));
//! assert_eq!(
//!     api.call("/b", String::from("x")).await,
//!     Ok(String::from("/b <- x"))
//! );
//! # }
//! ```

pub mod core;
pub mod digest;
pub mod surface;
pub mod target;
pub mod verb;

#[cfg(test)]
mod tests;

// Re-export main types
pub use core::{Registry, TargetSequencer};
pub use digest::{DigestError, signature_digest};
pub use surface::{Surface, surface};
pub use target::{DirectFn, FnTarget, RequestTarget, VerbTable};
pub use verb::{UnknownVerb, Verb};
