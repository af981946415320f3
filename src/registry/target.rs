/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Targets that supply the operations a registry sequences.
//!
//! A target either exposes one callable member per [`Verb`], or is itself
//! callable with the signature as its first positional argument. Closures
//! own everything they need, so a member looked up from a target keeps its
//! context for as long as a sequencer holds it.

use super::verb::Verb;
use crate::sequencer::{OperationFn, OperationFuture, Payload};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Type-erased direct call receiving `(signature, args)`.
pub type DirectFn<A, T, E> = Arc<dyn Fn(String, A) -> OperationFuture<T, E> + Send + Sync>;

/// The underlying operation target of a [`Registry`](super::Registry).
pub trait RequestTarget<A>: Send + Sync + 'static {
    /// Success payload of every operation.
    type Output: Payload;

    /// Failure payload of every operation.
    type Error: Payload;

    /// Returns the member callable for `verb`, or `None` if the target has none.
    fn member(&self, verb: Verb) -> Option<OperationFn<A, Self::Output, Self::Error>>;

    /// Returns the target itself as a callable bound to `signature`, or
    /// `None` if the target cannot be called directly.
    fn callable(&self, signature: &str) -> Option<OperationFn<A, Self::Output, Self::Error>>;
}

fn bind_signature<A, T, E>(direct: &DirectFn<A, T, E>, signature: &str) -> OperationFn<A, T, E>
where
    A: 'static,
    T: 'static,
    E: 'static,
{
    let direct = Arc::clone(direct);
    let signature = signature.to_owned();
    Arc::new(move |args| direct(signature.clone(), args))
}

fn erase<A, T, E, F, Fut>(operation: F) -> OperationFn<A, T, E>
where
    A: 'static,
    T: 'static,
    E: 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    Arc::new(move |args| Box::pin(operation(args)) as OperationFuture<T, E>)
}

/// A bare callable target.
///
/// Has no verb members; every signature is passed through as the first
/// argument.
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::{FnTarget, RequestTarget, Verb};
///
/// let target = FnTarget::new(|url: String, page: u32| async move {
///     Ok::<_, String>(format!("{url}?page={page}"))
/// });
/// assert!(target.member(Verb::Get).is_none());
/// assert!(target.callable("/users").is_some());
/// ```
pub struct FnTarget<A, T, E> {
    call: DirectFn<A, T, E>,
}

impl<A, T, E> FnTarget<A, T, E>
where
    A: Send + 'static,
    T: Payload,
    E: Payload,
{
    /// Wraps `call`, which receives the signature and the remaining arguments.
    #[must_use]
    pub fn new<F, Fut>(call: F) -> Self
    where
        F: Fn(String, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            call: Arc::new(move |signature, args| {
                Box::pin(call(signature, args)) as OperationFuture<T, E>
            }),
        }
    }
}

impl<A, T, E> RequestTarget<A> for FnTarget<A, T, E>
where
    A: Send + 'static,
    T: Payload,
    E: Payload,
{
    type Output = T;
    type Error = E;

    fn member(&self, _verb: Verb) -> Option<OperationFn<A, T, E>> {
        None
    }

    fn callable(&self, signature: &str) -> Option<OperationFn<A, T, E>> {
        Some(bind_signature(&self.call, signature))
    }
}

impl<A, T, E> fmt::Debug for FnTarget<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTarget").finish_non_exhaustive()
    }
}

/// A target with one member per registered verb and an optional direct call.
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::{RequestTarget, Verb, VerbTable};
///
/// let table = VerbTable::new()
///     .on(Verb::Get, |url: String| async move { Ok::<_, String>(format!("GET {url}")) })
///     .on(Verb::Delete, |url: String| async move { Ok::<_, String>(format!("DELETE {url}")) });
///
/// assert!(table.member(Verb::Get).is_some());
/// assert!(table.member(Verb::Post).is_none());
/// assert!(table.callable("/users").is_none());
/// ```
pub struct VerbTable<A, T, E> {
    members: HashMap<Verb, OperationFn<A, T, E>>,
    direct: Option<DirectFn<A, T, E>>,
}

impl<A, T, E> VerbTable<A, T, E>
where
    A: Send + 'static,
    T: Payload,
    E: Payload,
{
    /// Creates a table with no members.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            direct: None,
        }
    }

    /// Registers the member for `verb`, replacing any previous one.
    #[must_use]
    pub fn on<F, Fut>(mut self, verb: Verb, operation: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.members.insert(verb, erase(operation));
        self
    }

    /// Makes the table directly callable for non-verb signatures.
    #[must_use]
    pub fn direct<F, Fut>(mut self, call: F) -> Self
    where
        F: Fn(String, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.direct = Some(Arc::new(move |signature, args| {
            Box::pin(call(signature, args)) as OperationFuture<T, E>
        }));
        self
    }
}

impl<A, T, E> Default for VerbTable<A, T, E>
where
    A: Send + 'static,
    T: Payload,
    E: Payload,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, E> RequestTarget<A> for VerbTable<A, T, E>
where
    A: Send + 'static,
    T: Payload,
    E: Payload,
{
    type Output = T;
    type Error = E;

    fn member(&self, verb: Verb) -> Option<OperationFn<A, T, E>> {
        self.members.get(&verb).cloned()
    }

    fn callable(&self, signature: &str) -> Option<OperationFn<A, T, E>> {
        self.direct
            .as_ref()
            .map(|direct| bind_signature(direct, signature))
    }
}

impl<A, T, E> fmt::Debug for VerbTable<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerbTable")
            .field("verbs", &self.members.keys().collect::<Vec<_>>())
            .field("direct", &self.direct.is_some())
            .finish()
    }
}
