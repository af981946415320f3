/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Value-level copies of recorded payloads.
//!
//! Payloads handed to callers are produced by a full JSON round trip, so a
//! caller never shares structure with the cached outcome.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Bounds required of success and failure payloads.
pub trait Payload: Clone + Serialize + DeserializeOwned + Send + 'static {}

impl<T> Payload for T where T: Clone + Serialize + DeserializeOwned + Send + 'static {}

/// Returns a deep copy of `value` made through its JSON representation.
///
/// Values that cannot round-trip (non-finite floats, maps with non-string
/// keys, failing `Serialize` impls) are logged and returned as a plain
/// [`Clone`] of the original.
///
/// # Examples
///
/// ```
/// use request_sequencer::sequencer::deep_copy;
///
/// let original = vec![String::from("a"), String::from("b")];
/// assert_eq!(deep_copy(&original), original);
/// assert!(deep_copy(&f64::INFINITY).is_infinite());
/// ```
#[must_use]
pub fn deep_copy<T: Payload>(value: &T) -> T {
    match serde_json::to_value(value).and_then(serde_json::from_value) {
        Ok(copy) => copy,
        Err(error) => {
            warn!(%error, "payload could not be round-tripped, returning original");
            value.clone()
        }
    }
}
