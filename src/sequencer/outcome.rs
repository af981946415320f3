/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Recorded outcome of a sequenced call.

/// The most recently recorded result of a [`Sequencer`](super::Sequencer).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    /// The operation succeeded with this value.
    Success(T),

    /// The operation failed with this error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this outcome is a success.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this outcome is a failure.
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts the outcome into a `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error),
        }
    }
}
