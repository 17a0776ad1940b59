//! Type-erased signals.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::signal::{Constant, Signal};
use crate::watcher::{BoxWatcherGuard, Context};

trait DynSignal<T> {
    fn get(&self) -> T;
    fn watch(&self, watcher: Box<dyn Fn(Context<T>)>) -> BoxWatcherGuard;
}

struct Erased<S>(S);

impl<S: Signal> DynSignal<S::Output> for Erased<S> {
    fn get(&self) -> S::Output {
        self.0.get()
    }

    fn watch(&self, watcher: Box<dyn Fn(Context<S::Output>)>) -> BoxWatcherGuard {
        let guard = self.0.watch(move |ctx| watcher(ctx));
        Box::new(guard)
    }
}

/// A clonable, type-erased signal.
///
/// `Computed` is how component configurations store reactive values of any
/// concrete signal type, mirroring how backends consume them: read with
/// `get`, subscribe with `watch`.
pub struct Computed<T>(Rc<dyn DynSignal<T>>);

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Computed<T> {
    fmt_type_name!();
}

impl<T: 'static> Computed<T> {
    /// Erases a concrete signal.
    pub fn new(signal: impl Signal<Output = T>) -> Self {
        Self(Rc::new(Erased(signal)))
    }

    /// A computed value that never changes.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(Constant::new(value))
    }
}

impl<T: 'static> Signal for Computed<T> {
    type Output = T;
    type Guard = BoxWatcherGuard;

    fn get(&self) -> T {
        self.0.get()
    }

    fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> Self::Guard {
        self.0.watch(Box::new(watcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding;

    #[test]
    fn constant_computed() {
        let value = Computed::constant(42);
        assert_eq!(value.get(), 42);
    }

    #[test]
    fn erased_binding_stays_live() {
        let cell = binding(1);
        let computed = Computed::new(cell.clone());
        cell.set(9);
        assert_eq!(computed.get(), 9);
    }
}
