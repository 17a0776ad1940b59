//! Combinators over signals.

use alloc::rc::Rc;
use core::fmt;

use crate::Computed;
use crate::signal::Signal;
use crate::watcher::Context;

/// Extension methods available on every signal.
pub trait SignalExt: Signal {
    /// Derives a signal by applying `f` to every value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U + Clone + 'static,
    {
        Map { source: self, f }
    }

    /// Pairs this signal with another, yielding tuples of both values.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Signal,
    {
        Zip {
            a: self,
            b: other,
        }
    }

    /// Erases this signal into a [`Computed`].
    fn computed(self) -> Computed<Self::Output>
    where
        Self: Sized,
        Self::Output: 'static,
    {
        Computed::new(self)
    }
}

impl<S: Signal> SignalExt for S {}

/// Signal produced by [`SignalExt::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> fmt::Debug for Map<S, F> {
    fmt_type_name!();
}

impl<S, F, U> Signal for Map<S, F>
where
    S: Signal,
    F: Fn(S::Output) -> U + Clone + 'static,
{
    type Output = U;
    type Guard = S::Guard;

    fn get(&self) -> U {
        (self.f)(self.source.get())
    }

    fn watch(&self, watcher: impl Fn(Context<U>) + 'static) -> Self::Guard {
        let f = self.f.clone();
        self.source.watch(move |ctx| watcher(ctx.map(&f)))
    }
}

/// Signal produced by [`SignalExt::zip`].
#[derive(Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> fmt::Debug for Zip<A, B> {
    fmt_type_name!();
}

impl<A, B> Signal for Zip<A, B>
where
    A: Signal,
    B: Signal,
{
    type Output = (A::Output, B::Output);
    type Guard = (A::Guard, B::Guard);

    fn get(&self) -> Self::Output {
        (self.a.get(), self.b.get())
    }

    fn watch(&self, watcher: impl Fn(Context<Self::Output>) + 'static) -> Self::Guard {
        let watcher = Rc::new(watcher);
        let left = {
            let other = self.b.clone();
            let watcher = Rc::clone(&watcher);
            self.a
                .watch(move |ctx| watcher(Context::new((ctx.into_value(), other.get()))))
        };
        let right = {
            let other = self.a.clone();
            self.b
                .watch(move |ctx| watcher(Context::new((other.get(), ctx.into_value()))))
        };
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn map_tracks_source() {
        let cell = binding(2);
        let doubled = cell.clone().map(|value| value * 2);
        assert_eq!(doubled.get(), 4);
        cell.set(5);
        assert_eq!(doubled.get(), 10);
    }

    #[test]
    fn map_forwards_notifications() {
        let cell = binding(1);
        let doubled = cell.clone().map(|value| value * 2);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _guard = doubled.watch({
            let seen = Rc::clone(&seen);
            move |ctx| seen.borrow_mut().push(ctx.into_value())
        });
        cell.set(3);
        assert_eq!(&*seen.borrow(), &[6]);
    }

    #[test]
    fn zip_combines_latest_values() {
        let left = binding(1);
        let right = binding("a");
        let pair = left.clone().zip(right.clone());
        assert_eq!(pair.get(), (1, "a"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _guard = pair.watch({
            let seen = Rc::clone(&seen);
            move |ctx| seen.borrow_mut().push(ctx.into_value())
        });
        left.set(2);
        right.set("b");
        assert_eq!(&*seen.borrow(), &[(2, "a"), (2, "b")]);
    }
}
