//! Deferred effects.
//!
//! An [`Effect<T>`] is a description of an asynchronous computation that has
//! not started yet. Building and composing effects performs no work; the
//! computation only runs when [`Effect::run`] is awaited. Every call to
//! `run` performs the underlying work again, nothing is cached.
//!
//! ## Combinators
//!
//! - [`of`]: wrap a ready value
//! - [`lift`]: turn an `async fn(T) -> Result<U>` into `fn(T) -> Effect<U>`
//! - [`bind`]: sequence an effect with a function producing the next one
//!
//! ## Example
//!
//! ```
//! use zipmeta::effect::{self, Effect};
//!
//! async fn double(n: u32) -> anyhow::Result<u32> {
//!     Ok(n * 2)
//! }
//!
//! # #[tokio::main] async fn main() -> anyhow::Result<()> {
//! let chain: Effect<u32> = effect::of(21).bind(effect::lift(double));
//! assert_eq!(chain.run().await?, 42);
//! # Ok(()) }
//! ```

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use futures::future::{BoxFuture, FutureExt};

type Thunk<T> = dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync;

/// A suspended, zero-argument asynchronous computation producing `T`.
pub struct Effect<T> {
    thunk: Arc<Thunk<T>>,
}

impl<T> Clone for Effect<T> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<T: Send + 'static> Effect<T> {
    /// Build an effect from a function returning a future.
    ///
    /// `f` is called once per [`run`](Self::run), never at construction.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            thunk: Arc::new(move || f().boxed()),
        }
    }

    /// Invoke the effect and await its result.
    pub async fn run(&self) -> Result<T> {
        (self.thunk)().await
    }

    /// Sequence this effect with `mapper`.
    ///
    /// See [`bind`] for the ordering and failure guarantees.
    pub fn bind<U, M>(self, mapper: M) -> Effect<U>
    where
        U: Send + 'static,
        M: Fn(T) -> Effect<U> + Send + Sync + 'static,
    {
        let mapper = Arc::new(mapper);
        Effect::new(move || {
            let first = self.clone();
            let mapper = Arc::clone(&mapper);
            async move {
                let value = first.run().await?;
                mapper(value).run().await
            }
        })
    }

    /// Transform the result with a plain function.
    pub fn map<U, F>(self, f: F) -> Effect<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Effect::new(move || {
            let inner = self.clone();
            let f = Arc::clone(&f);
            async move { inner.run().await.map(|value| f(value)) }
        })
    }
}

/// An effect that resolves to `value` without doing anything else.
pub fn of<T>(value: T) -> Effect<T>
where
    T: Clone + Send + Sync + 'static,
{
    Effect::new(move || {
        let value = value.clone();
        async move { Ok(value) }
    })
}

/// Convert an async function into one that returns a deferred effect.
///
/// The returned function only captures its argument; `pure` is not called
/// until the effect runs. Each run hands `pure` a clone of the argument, so
/// large payloads should be cheaply cloneable (`Bytes`, `Arc`).
pub fn lift<T, U, F, Fut>(pure: F) -> impl Fn(T) -> Effect<U> + Clone + Send + Sync + 'static
where
    T: Clone + Send + Sync + 'static,
    U: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<U>> + Send + 'static,
{
    let pure = Arc::new(pure);
    move |arg: T| {
        let pure = Arc::clone(&pure);
        Effect::new(move || pure(arg.clone()))
    }
}

/// Run `effect`, feed its value to `mapper`, then run the effect it returns.
///
/// The second effect never starts before the first has produced its value.
/// If either fails, the combined effect fails with that error and nothing
/// after it is invoked.
pub fn bind<T, U, M>(effect: Effect<T>, mapper: M) -> Effect<U>
where
    T: Send + 'static,
    U: Send + 'static,
    M: Fn(T) -> Effect<U> + Send + Sync + 'static,
{
    effect.bind(mapper)
}
