/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Errors delivered to callers of a sequenced operation.

use thiserror::Error;

/// Error returned by [`Sequencer::call`](super::Sequencer::call) and the
/// registry entry points.
///
/// `E` is the wrapped operation's own error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError<E> {
    /// The wrapped operation failed, either directly or through an adopted
    /// cached failure.
    #[error("operation failed: {0}")]
    Failed(E),

    /// The call had to adopt the cached outcome, but no outcome has been
    /// recorded yet.
    #[error("no outcome has been recorded yet")]
    NoOutcome,

    /// The target exposes no callable for the requested signature.
    #[error("target has no callable for `{signature}`")]
    Unsupported {
        /// The verb or signature that was requested.
        signature: String,
    },
}

impl<E> CallError<E> {
    /// Returns the operation error, if this is a [`CallError::Failed`].
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Returns `true` if no outcome was available to adopt.
    #[inline]
    #[must_use]
    pub fn is_no_outcome(&self) -> bool {
        matches!(self, Self::NoOutcome)
    }
}
