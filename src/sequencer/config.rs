/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Sequencer configuration.
//!
//! A [`SequencerConfig`] fixes the initial [`SequencerMode`] and the
//! [`FailurePolicy`] applied when a wrapped operation fails. Registries apply
//! the same configuration to every sequencer they create.

use super::mode::SequencerMode;
use serde::{Deserialize, Serialize};

/// How a failed operation interacts with the cached outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// A failure is never recorded. The failing caller adopts whatever
    /// outcome is currently cached, even when it was the most recently
    /// issued call.
    #[default]
    AdoptCached,

    /// A failure of the most recently issued call is recorded as the cached
    /// outcome and delivered to that caller. Superseded failures still adopt
    /// the cached outcome.
    RecordWhenCurrent,
}

/// Configuration for a [`Sequencer`](super::Sequencer).
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use request_sequencer::sequencer::{FailurePolicy, SequencerConfig, SequencerMode};
///
/// let config = SequencerConfig::from_json(r#"{ "failure_policy": "record_when_current" }"#)
///     .unwrap();
/// assert_eq!(config.mode, SequencerMode::Sequenced);
/// assert_eq!(config.failure_policy, FailurePolicy::RecordWhenCurrent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Mode the sequencer starts in.
    pub mode: SequencerMode,

    /// Treatment of operation failures.
    pub failure_policy: FailurePolicy,
}

impl SequencerConfig {
    /// Creates a configuration with the given mode and the default failure policy.
    #[must_use]
    pub fn with_mode(mode: SequencerMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns a copy of this configuration using `failure_policy`.
    #[must_use]
    pub fn failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the document is malformed or
    /// names an unknown mode or policy.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
