//! The [`Signal`] trait and conversions into signals.
//!
//! A signal is a clonable handle to a value that may change over time.
//! [`Binding`](crate::Binding) is the writable source, [`Constant`] the
//! degenerate never-changing case, and combinators from
//! [`SignalExt`](crate::SignalExt) derive new signals from existing ones.

use crate::Computed;
use crate::watcher::{Context, WatcherGuard};

/// A clonable handle to a value that may change over time.
///
/// `get` returns the current value; `watch` registers a callback invoked
/// with every subsequent value until the returned guard is dropped.
pub trait Signal: Clone + 'static {
    /// The value produced by this signal.
    type Output;
    /// Guard keeping the watcher registered.
    type Guard: WatcherGuard;

    /// Returns the current value.
    fn get(&self) -> Self::Output;

    /// Registers a watcher for future values.
    fn watch(&self, watcher: impl Fn(Context<Self::Output>) + 'static) -> Self::Guard;
}

/// A signal that always yields the same value and never notifies.
#[derive(Debug, Clone)]
pub struct Constant<T>(T);

impl<T> Constant<T> {
    /// Wraps a plain value as a signal.
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T: Clone + 'static> Signal for Constant<T> {
    type Output = T;
    type Guard = ();

    fn get(&self) -> T {
        self.0.clone()
    }

    fn watch(&self, _watcher: impl Fn(Context<T>) + 'static) -> Self::Guard {}
}

/// Conversion into a signal producing `T`.
///
/// Implemented for every signal (identity) and, via
/// [`impl_constant!`](crate::impl_constant), for plain value types that
/// convert into `T`. The latter lets APIs accept either a reactive source
/// or a fixed value.
pub trait IntoSignal<T> {
    /// The resulting signal type.
    type Signal: Signal<Output = T>;

    /// Converts `self` into a signal.
    fn into_signal(self) -> Self::Signal;
}

impl<S: Signal> IntoSignal<S::Output> for S {
    type Signal = S;

    fn into_signal(self) -> S {
        self
    }
}

/// Conversion into a type-erased [`Computed`] signal.
pub trait IntoComputed<T>: IntoSignal<T> {
    /// Converts `self` into a [`Computed`].
    fn into_computed(self) -> Computed<T>;
}

impl<S, T> IntoComputed<T> for S
where
    S: IntoSignal<T>,
    T: 'static,
{
    fn into_computed(self) -> Computed<T> {
        Computed::new(self.into_signal())
    }
}

/// Implements [`IntoSignal`]/[`IntoComputed`] for plain value types.
///
/// The generated impl covers every target the value converts into with
/// `From`, so a `Str` can stand in wherever a styled-string signal is
/// expected. Types given to this macro must not implement
/// [`Signal`] themselves.
#[macro_export]
macro_rules! impl_constant {
    ($($ty:ty),+ $(,)?) => {$(
        impl<T> $crate::signal::IntoSignal<T> for $ty
        where
            T: From<$ty> + Clone + 'static,
        {
            type Signal = $crate::signal::Constant<T>;

            fn into_signal(self) -> Self::Signal {
                $crate::signal::Constant::new(T::from(self))
            }
        }
    )+};
}

impl_constant!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    &'static str,
    alloc::string::String
);
