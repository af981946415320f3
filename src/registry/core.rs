/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core Registry implementation.
//!
//! This module provides the [`Registry`] that maps each call signature's
//! digest to its own [`Sequencer`], created the first time the digest is
//! seen and kept for the life of the registry.

use super::digest::signature_digest;
use super::target::RequestTarget;
use super::verb::Verb;
use crate::sequencer::{CallError, CallFuture, OperationFn, Sequencer, SequencerConfig};
use dashmap::DashMap;
use serde::Serialize;
use std::fmt;
use std::future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sequencer type created by a registry over target `R`.
pub type TargetSequencer<A, R> =
    Sequencer<A, <R as RequestTarget<A>>::Output, <R as RequestTarget<A>>::Error>;

/// Keyed collection of sequencers, one per distinct call signature.
///
/// Calls with the same verb and arguments share one sequencer's recency
/// state; calls that differ in any argument are ordered independently.
/// Entries are never evicted.
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::{Registry, Verb, VerbTable};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let registry = Registry::new(
///     VerbTable::new().on(Verb::Get, |url: String| async move { Ok::<_, String>(url.len()) }),
/// );
///
/// assert_eq!(registry.get(String::from("/users")).await, Ok(6));
/// assert_eq!(registry.len(), 1);
/// # }
/// ```
pub struct Registry<A, R: RequestTarget<A>> {
    /// Supplies the operation for each new digest.
    target: R,

    /// Applied to every sequencer the registry creates.
    config: SequencerConfig,

    /// Sequencers by signature digest.
    sequencers: DashMap<u32, Arc<TargetSequencer<A, R>>>,
}

impl<A, R> Registry<A, R>
where
    A: Serialize + Send + 'static,
    R: RequestTarget<A>,
{
    /// Creates an empty registry over `target`.
    #[must_use]
    pub fn new(target: R) -> Self {
        Self::with_config(target, SequencerConfig::default())
    }

    /// Creates an empty registry whose sequencers use `config`.
    #[must_use]
    pub fn with_config(target: R, config: SequencerConfig) -> Self {
        Self {
            target,
            config,
            sequencers: DashMap::new(),
        }
    }

    /// Issues a call identified by `signature`.
    ///
    /// A recognized [`Verb`] dispatches to the target's member for that
    /// verb. Any other signature calls the target directly with the
    /// signature as its first argument. If the call's digest cannot be
    /// derived, the operation is invoked without sequencing.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`Sequencer::call`], the returned future
    /// resolves to [`CallError::Unsupported`] when the target has no
    /// callable for `signature`.
    pub fn invoke(&self, signature: &str, args: A) -> CallFuture<R::Output, R::Error> {
        let operation = match signature.parse::<Verb>() {
            Ok(verb) => self.target.member(verb),
            Err(_) => self.target.callable(signature),
        };
        let Some(operation) = operation else {
            return Box::pin(future::ready(Err(CallError::Unsupported {
                signature: signature.to_owned(),
            })));
        };

        let digest = match signature_digest(signature, &args) {
            Ok(digest) => digest,
            Err(error) => {
                warn!(signature, %error, "call digest failed, invoking without sequencing");
                let pending = operation(args);
                return Box::pin(async move { pending.await.map_err(CallError::Failed) });
            }
        };

        self.sequencer_or_insert(digest, operation).call(args)
    }

    /// Issues `verb` with `args`.
    ///
    /// # Errors
    ///
    /// See [`Registry::invoke`].
    pub fn verb(&self, verb: Verb, args: A) -> CallFuture<R::Output, R::Error> {
        self.invoke(verb.as_str(), args)
    }

    /// Issues a `delete` call. See [`Registry::invoke`].
    pub fn delete(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Delete, args)
    }

    /// Issues a `get` call. See [`Registry::invoke`].
    pub fn get(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Get, args)
    }

    /// Issues a `head` call. See [`Registry::invoke`].
    pub fn head(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Head, args)
    }

    /// Issues an `options` call. See [`Registry::invoke`].
    pub fn options(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Options, args)
    }

    /// Issues a `post` call. See [`Registry::invoke`].
    pub fn post(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Post, args)
    }

    /// Issues a `put` call. See [`Registry::invoke`].
    pub fn put(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Put, args)
    }

    /// Issues a `patch` call. See [`Registry::invoke`].
    pub fn patch(&self, args: A) -> CallFuture<R::Output, R::Error> {
        self.verb(Verb::Patch, args)
    }

    /// Returns the sequencer that calls with `signature` and `args` share,
    /// if one has been created.
    #[must_use]
    pub fn sequencer_for(&self, signature: &str, args: &A) -> Option<Arc<TargetSequencer<A, R>>> {
        signature_digest(signature, args)
            .ok()
            .and_then(|digest| self.sequencer(digest))
    }

    /// Returns the sequencer bound to `digest`, if any.
    #[must_use]
    pub fn sequencer(&self, digest: u32) -> Option<Arc<TargetSequencer<A, R>>> {
        self.sequencers
            .get(&digest)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Returns the number of sequencers created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequencers.len()
    }

    /// Returns `true` if no sequencer has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequencers.is_empty()
    }

    /// Returns the configuration applied to new sequencers.
    #[must_use]
    pub fn config(&self) -> SequencerConfig {
        self.config
    }

    /// Returns the underlying target.
    #[must_use]
    pub fn target(&self) -> &R {
        &self.target
    }

    fn sequencer_or_insert(
        &self,
        digest: u32,
        operation: OperationFn<A, R::Output, R::Error>,
    ) -> Arc<TargetSequencer<A, R>> {
        if let Some(existing) = self.sequencer(digest) {
            return existing;
        }

        let entry = self.sequencers.entry(digest).or_insert_with(|| {
            debug!(digest, "creating sequencer for new call signature");
            Arc::new(Sequencer::from_operation(operation, self.config))
        });
        Arc::clone(entry.value())
    }
}

impl<A, R> fmt::Debug for Registry<A, R>
where
    R: RequestTarget<A> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("target", &self.target)
            .field("config", &self.config)
            .field("sequencers", &self.sequencers.len())
            .finish()
    }
}
