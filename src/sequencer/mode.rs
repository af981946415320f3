/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Sequencing mode.

use serde::{Deserialize, Serialize};

/// Whether a [`Sequencer`](super::Sequencer) coordinates its calls.
///
/// # Examples
///
/// ```
/// use request_sequencer::sequencer::SequencerMode;
///
/// assert_eq!(SequencerMode::default(), SequencerMode::Sequenced);
/// assert_eq!(SequencerMode::Sequenced.toggled(), SequencerMode::Disabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerMode {
    /// Calls pass straight through to the wrapped operation.
    Disabled,

    /// Calls are ordered by issuance; the most recently issued call wins.
    #[default]
    Sequenced,
}

impl SequencerMode {
    /// Returns the opposite mode.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Disabled => Self::Sequenced,
            Self::Sequenced => Self::Disabled,
        }
    }

    /// Returns `true` if calls are coordinated.
    #[inline]
    #[must_use]
    pub fn is_sequenced(self) -> bool {
        matches!(self, Self::Sequenced)
    }
}

impl From<bool> for SequencerMode {
    fn from(sequenced: bool) -> Self {
        if sequenced {
            Self::Sequenced
        } else {
            Self::Disabled
        }
    }
}
