/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Recognized request verbs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Request verbs dispatched to a target's per-verb members.
///
/// Any other signature passed to the registry is treated as a direct call of
/// the target itself.
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::Verb;
///
/// assert_eq!("get".parse::<Verb>(), Ok(Verb::Get));
/// assert_eq!(Verb::Patch.as_str(), "patch");
/// assert!("GET".parse::<Verb>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Delete,
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
}

impl Verb {
    /// Every recognized verb.
    pub const ALL: [Verb; 7] = [
        Verb::Delete,
        Verb::Get,
        Verb::Head,
        Verb::Options,
        Verb::Post,
        Verb::Put,
        Verb::Patch,
    ];

    /// Returns the lowercase verb name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Get => "get",
            Self::Head => "head",
            Self::Options => "options",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signature is not one of the recognized verbs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown verb `{0}`")]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    /// Matches the lowercase verb name exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| UnknownVerb(s.to_owned()))
    }
}
