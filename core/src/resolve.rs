//! The resolve pattern: environment-driven, reactive configuration.
//!
//! Types like colors and fonts are not fixed values in a view description;
//! they are *resolvable*: given an [`Environment`], they look up or compute
//! the concrete value, returning a [`Computed`] signal so theme changes
//! installed as signals propagate without rebuilding the view tree.
//!
//! A token type usually queries the environment and falls back to a
//! built-in default:
//!
//! ```ignore
//! impl Resolvable for Title {
//!     type Resolved = ResolvedFont;
//!
//!     fn resolve(&self, env: &Environment) -> Computed<ResolvedFont> {
//!         env.query::<Self, Computed<ResolvedFont>>()
//!             .cloned()
//!             .unwrap_or_else(|| Computed::constant(DEFAULT))
//!     }
//! }
//! ```
//!
//! [`AnyResolvable`] erases concrete resolvable types so a `Color` can be
//! built from a hex literal, a theme token, or a derived value alike, and
//! [`Map`] transforms a resolvable's output while keeping it reactive.

use alloc::boxed::Box;
use core::fmt::Debug;

use ripple_reactive::{Computed, SignalExt};

use crate::env::Environment;

/// A value resolved against an environment into a reactive signal.
pub trait Resolvable: Debug + Clone {
    /// The concrete type produced after resolution.
    type Resolved;

    /// Resolves this value in the given environment.
    fn resolve(&self, env: &Environment) -> Computed<Self::Resolved>;
}

trait ResolvableImpl<T>: Debug {
    fn resolve(&self, env: &Environment) -> Computed<T>;
    fn clone_box(&self) -> Box<dyn ResolvableImpl<T>>;
}

impl<R: Resolvable + 'static> ResolvableImpl<R::Resolved> for R {
    fn resolve(&self, env: &Environment) -> Computed<R::Resolved> {
        Resolvable::resolve(self, env)
    }

    fn clone_box(&self) -> Box<dyn ResolvableImpl<R::Resolved>> {
        Box::new(self.clone())
    }
}

/// A type-erased wrapper for any resolvable value.
#[derive(Debug)]
pub struct AnyResolvable<T> {
    inner: Box<dyn ResolvableImpl<T>>,
}

impl<T> Clone for AnyResolvable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T: 'static + Debug> Resolvable for AnyResolvable<T> {
    type Resolved = T;

    fn resolve(&self, env: &Environment) -> Computed<T> {
        self.inner.resolve(env)
    }
}

impl<T> AnyResolvable<T> {
    /// Erases a concrete resolvable value.
    pub fn new(value: impl Resolvable<Resolved = T> + 'static) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Resolves this value in the given environment.
    #[must_use]
    pub fn resolve(&self, env: &Environment) -> Computed<T> {
        self.inner.resolve(env)
    }
}

/// Transforms a resolvable's output with a function, lazily.
#[derive(Clone)]
pub struct Map<R, F> {
    resolvable: R,
    func: F,
}

impl<R: Debug, F> Debug for Map<R, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Map")
            .field("resolvable", &self.resolvable)
            .field("func", &"Fn(...)")
            .finish()
    }
}

impl<R, F> Map<R, F> {
    /// Wraps `resolvable`, applying `func` to every resolved value.
    #[must_use]
    pub const fn new<T, U>(resolvable: R, func: F) -> Self
    where
        R: Resolvable<Resolved = T>,
        F: Fn(T) -> U + Clone + 'static,
        T: 'static,
        U: 'static,
    {
        Self { resolvable, func }
    }
}

impl<R, F, T, U> Resolvable for Map<R, F>
where
    R: Resolvable<Resolved = T>,
    F: Fn(T) -> U + Clone + 'static,
    T: 'static,
    U: 'static,
{
    type Resolved = U;

    fn resolve(&self, env: &Environment) -> Computed<U> {
        let func = self.func.clone();
        self.resolvable.resolve(env).map(func).computed()
    }
}
