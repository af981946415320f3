/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Key derivation for call signatures.
//!
//! A call is identified by the JSON text of `[signature, ...args]`, mixed
//! into 32 bits with FNV-1a over UTF-16 code units. A JSON array argument is
//! spread positionally, so `("/users", 1)` contributes two elements; any
//! other JSON value is a single positional argument.

use serde::Serialize;
use thiserror::Error;

/// FNV-1a 32-bit offset basis, the digest of the empty string.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// Errors produced while deriving a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The arguments have no JSON representation.
    #[error("call signature has no JSON representation: {0}")]
    Representation(#[from] serde_json::Error),
}

/// Mixes `repr` into a 32-bit digest.
///
/// Each UTF-16 code unit is XORed in, then the hash is multiplied by the
/// FNV prime expressed as shifts.
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::digest::{FNV_OFFSET_BASIS, fnv_mix};
///
/// assert_eq!(fnv_mix(""), FNV_OFFSET_BASIS);
/// assert_eq!(fnv_mix("a"), 0xe40c_292c);
/// ```
#[must_use]
pub fn fnv_mix(repr: &str) -> u32 {
    repr.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        let hash = hash ^ u32::from(unit);
        hash.wrapping_add(
            (hash << 1)
                .wrapping_add(hash << 4)
                .wrapping_add(hash << 7)
                .wrapping_add(hash << 8)
                .wrapping_add(hash << 24),
        )
    })
}

/// Returns the JSON text of `[signature, ...args]`.
///
/// # Errors
///
/// Returns [`DigestError::Representation`] if `args` cannot be serialized.
pub fn representation<A: Serialize + ?Sized>(
    signature: &str,
    args: &A,
) -> Result<String, DigestError> {
    let signature = serde_json::to_string(signature)?;
    let args = serde_json::to_string(args)?;

    Ok(match args.strip_prefix('[') {
        Some("]") => format!("[{signature}]"),
        Some(rest) => format!("[{signature},{rest}"),
        None => format!("[{signature},{args}]"),
    })
}

/// Derives the digest of a call.
///
/// # Errors
///
/// Returns [`DigestError::Representation`] if `args` cannot be serialized.
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::digest::signature_digest;
///
/// let first = signature_digest("get", &("/users", 1)).unwrap();
/// let again = signature_digest("get", &("/users", 1)).unwrap();
/// let other = signature_digest("get", &("/users", 2)).unwrap();
/// assert_eq!(first, again);
/// assert_ne!(first, other);
/// ```
pub fn signature_digest<A: Serialize + ?Sized>(
    signature: &str,
    args: &A,
) -> Result<u32, DigestError> {
    representation(signature, args).map(|repr| fnv_mix(&repr))
}
