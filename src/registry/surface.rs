/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Ready-to-use callable surface over a registry.

use super::core::Registry;
use super::target::RequestTarget;
use crate::sequencer::{CallFuture, SequencerConfig};
use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;

/// Cloneable handle offering a default call path plus one method per verb.
///
/// `surface.call(signature, args)` behaves like [`Registry::invoke`]; the
/// per-verb methods (`surface.get(args)`, `surface.post(args)`, ...) are
/// reached through [`Deref`] to the shared [`Registry`].
///
/// # Examples
///
/// ```
/// use request_sequencer::registry::{FnTarget, surface};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let api = surface(FnTarget::new(|url: String, id: u32| async move {
///     Ok::<_, String>(format!("{url}/{id}"))
/// }));
///
/// assert_eq!(api.call("/users", 7).await, Ok(String::from("/users/7")));
/// # }
/// ```
pub struct Surface<A, R: RequestTarget<A>> {
    registry: Arc<Registry<A, R>>,
}

/// Builds a [`Surface`] over `target` with the default configuration.
#[must_use]
pub fn surface<A, R>(target: R) -> Surface<A, R>
where
    A: Serialize + Send + 'static,
    R: RequestTarget<A>,
{
    Surface::with_config(target, SequencerConfig::default())
}

impl<A, R> Surface<A, R>
where
    A: Serialize + Send + 'static,
    R: RequestTarget<A>,
{
    /// Builds a surface whose sequencers use `config`.
    #[must_use]
    pub fn with_config(target: R, config: SequencerConfig) -> Self {
        Self {
            registry: Arc::new(Registry::with_config(target, config)),
        }
    }

    /// Default call path: a verb name or the target's first positional argument.
    ///
    /// # Errors
    ///
    /// See [`Registry::invoke`].
    pub fn call(&self, signature: &str, args: A) -> CallFuture<R::Output, R::Error> {
        self.registry.invoke(signature, args)
    }

    /// Returns the shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<Registry<A, R>> {
        &self.registry
    }
}

impl<A, R: RequestTarget<A>> Clone for Surface<A, R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<A, R: RequestTarget<A>> Deref for Surface<A, R> {
    type Target = Registry<A, R>;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}
