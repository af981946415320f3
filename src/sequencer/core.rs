/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core Sequencer implementation.
//!
//! This module provides the [`Sequencer`] that wraps one asynchronous
//! operation and orders its concurrent calls by issuance, so that only the
//! most recently issued call contributes the outcome every caller observes.

use super::config::{FailurePolicy, SequencerConfig};
use super::error::CallError;
use super::mode::SequencerMode;
use super::outcome::Outcome;
use super::snapshot::{Payload, deep_copy};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Boxed future produced by a wrapped operation.
pub type OperationFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// Type-erased asynchronous operation accepting one argument value.
pub type OperationFn<A, T, E> = Arc<dyn Fn(A) -> OperationFuture<T, E> + Send + Sync>;

/// Pending outcome handed back to a caller.
pub type CallFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, CallError<E>>> + Send>>;

/// Count of issued calls and the most recently recorded outcome.
///
/// Both fields are read and written under one lock so that a completion's
/// compare-and-record step is linearized against issuance and other
/// completions.
#[derive(Debug)]
struct SequencerState<T, E> {
    count: u64,
    last: Option<Outcome<T, E>>,
}

/// Latest-issued-wins coordinator for one asynchronous operation.
///
/// Every call issued in [`SequencerMode::Sequenced`] takes the next call
/// number. When the operation completes, the call is *current* if no later
/// call has been issued since; a current success is recorded and returned.
/// A superseded call discards its own result and adopts the recorded outcome
/// instead. Superseded operations are not cancelled.
///
/// # Examples
///
/// ```
/// use request_sequencer::sequencer::Sequencer;
/// use std::time::Duration;
///
/// async fn job((payload, delay_ms): (u32, u64)) -> Result<u32, String> {
///     tokio::time::sleep(Duration::from_millis(delay_ms)).await;
///     Ok(payload)
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let sequencer = Sequencer::new(job);
/// let first = sequencer.call((1, 20));
/// let second = sequencer.call((2, 10));
/// let (first, second) = tokio::join!(first, second);
/// assert_eq!(first, Ok(2));
/// assert_eq!(second, Ok(2));
/// # }
/// ```
pub struct Sequencer<A, T, E> {
    /// The wrapped operation.
    operation: OperationFn<A, T, E>,

    /// `true` while in [`SequencerMode::Sequenced`].
    sequenced: AtomicBool,

    /// Treatment of operation failures.
    failure_policy: FailurePolicy,

    /// Shared with every pending call.
    state: Arc<Mutex<SequencerState<T, E>>>,
}

impl<A, T, E> Sequencer<A, T, E>
where
    A: Send + 'static,
    T: Payload,
    E: Payload,
{
    /// Creates a sequenced wrapper around `operation` with the default configuration.
    #[must_use]
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::with_config(operation, SequencerConfig::default())
    }

    /// Creates a wrapper around `operation` using `config`.
    #[must_use]
    pub fn with_config<F, Fut>(operation: F, config: SequencerConfig) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let operation: OperationFn<A, T, E> =
            Arc::new(move |args| Box::pin(operation(args)) as OperationFuture<T, E>);
        Self::from_operation(operation, config)
    }

    /// Creates a wrapper around an already type-erased operation.
    #[must_use]
    pub fn from_operation(operation: OperationFn<A, T, E>, config: SequencerConfig) -> Self {
        Self {
            operation,
            sequenced: AtomicBool::new(config.mode.is_sequenced()),
            failure_policy: config.failure_policy,
            state: Arc::new(Mutex::new(SequencerState {
                count: 0,
                last: None,
            })),
        }
    }

    /// Issues a call with `args`.
    ///
    /// The call number is taken before this method returns, so issuance
    /// order is the order in which `call` is invoked, not the order in which
    /// the returned futures are first polled.
    ///
    /// In [`SequencerMode::Disabled`] the operation's result is returned
    /// as-is, with failures wrapped in [`CallError::Failed`].
    ///
    /// # Errors
    ///
    /// The returned future resolves to:
    /// - [`CallError::Failed`] with the operation's error (pass-through) or
    ///   with a copy of an adopted cached failure
    /// - [`CallError::NoOutcome`] if the call had to adopt the cached outcome
    ///   before any outcome was recorded
    pub fn call(&self, args: A) -> CallFuture<T, E> {
        if !self.mode().is_sequenced() {
            let pending = (self.operation)(args);
            return Box::pin(async move { pending.await.map_err(CallError::Failed) });
        }

        let issued = {
            let mut state = lock(&self.state);
            state.count += 1;
            state.count
        };
        trace!(issued, "sequenced call issued");

        let pending = (self.operation)(args);
        let state = Arc::clone(&self.state);
        let failure_policy = self.failure_policy;

        Box::pin(async move {
            let result = pending.await;
            settle(&state, issued, failure_policy, result)
        })
    }

    /// Flips between [`SequencerMode::Sequenced`] and [`SequencerMode::Disabled`].
    ///
    /// Only calls issued afterwards are affected.
    pub fn toggle(&self) {
        let was_sequenced = self.sequenced.fetch_xor(true, Ordering::AcqRel);
        trace!(
            mode = ?SequencerMode::from(!was_sequenced),
            "sequencer mode toggled"
        );
    }

    /// Sets the mode used by subsequently issued calls.
    pub fn set_mode(&self, mode: SequencerMode) {
        self.sequenced.store(mode.is_sequenced(), Ordering::Release);
    }

    /// Returns the current mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> SequencerMode {
        self.sequenced.load(Ordering::Acquire).into()
    }

    /// Returns the configured failure policy.
    #[inline]
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Returns the number of sequenced calls issued so far.
    #[must_use]
    pub fn call_count(&self) -> u64 {
        lock(&self.state).count
    }

    /// Returns a deep copy of the recorded outcome, or `None` before the
    /// first one is recorded.
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome<T, E>> {
        lock(&self.state).last.as_ref().map(copy_outcome)
    }
}

impl<A, T, E> fmt::Debug for Sequencer<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("Sequencer")
            .field("mode", &SequencerMode::from(self.sequenced.load(Ordering::Acquire)))
            .field("failure_policy", &self.failure_policy)
            .field("count", &state.count)
            .field("recorded", &state.last.is_some())
            .finish()
    }
}

/// Decides what a completed call delivers and records the outcome if the
/// call is still current.
fn settle<T: Payload, E: Payload>(
    state: &Mutex<SequencerState<T, E>>,
    issued: u64,
    failure_policy: FailurePolicy,
    result: Result<T, E>,
) -> Result<T, CallError<E>> {
    let mut state = lock(state);
    let current = issued == state.count;

    match result {
        Ok(data) if current => {
            let delivered = deep_copy(&data);
            state.last = Some(Outcome::Success(data));
            Ok(delivered)
        }
        Err(error) if current && failure_policy == FailurePolicy::RecordWhenCurrent => {
            state.last = Some(Outcome::Failure(deep_copy(&error)));
            Err(CallError::Failed(error))
        }
        result => {
            debug!(
                issued,
                latest = state.count,
                discarded_failure = result.is_err(),
                "call result set aside, adopting recorded outcome"
            );
            match state.last.as_ref() {
                Some(Outcome::Success(data)) => Ok(deep_copy(data)),
                Some(Outcome::Failure(error)) => Err(CallError::Failed(deep_copy(error))),
                None => Err(CallError::NoOutcome),
            }
        }
    }
}

fn copy_outcome<T: Payload, E: Payload>(outcome: &Outcome<T, E>) -> Outcome<T, E> {
    match outcome {
        Outcome::Success(data) => Outcome::Success(deep_copy(data)),
        Outcome::Failure(error) => Outcome::Failure(deep_copy(error)),
    }
}

/// The guarded state is never left half-updated, so a poisoned lock is
/// still safe to use.
fn lock<S>(mutex: &Mutex<S>) -> MutexGuard<'_, S> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
