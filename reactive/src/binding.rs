//! Writable state cells.

use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::signal::Signal;
use crate::watcher::{Context, WatcherGuard};

type WatcherMap<T> = BTreeMap<u64, Rc<dyn Fn(Context<T>)>>;

struct Shared<T> {
    value: RefCell<T>,
    watchers: RefCell<WatcherMap<T>>,
    next_id: Cell<u64>,
}

/// A writable, clonable state cell that notifies watchers on every `set`.
///
/// Clones share the same underlying value. `Binding` is single-threaded by
/// design, matching the cooperative rendering model of the kit.
pub struct Binding<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.shared.value).finish()
    }
}

impl<T> Binding<T> {
    /// Creates a new binding holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                watchers: RefCell::new(BTreeMap::new()),
                next_id: Cell::new(0),
            }),
        }
    }
}

impl<T: Clone> Binding<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }

    /// Replaces the value and notifies every registered watcher.
    pub fn set(&self, value: T) {
        *self.shared.value.borrow_mut() = value.clone();
        // Snapshot the watcher list so a watcher may register or drop
        // guards without poisoning the borrow.
        let watchers: Vec<_> = self.shared.watchers.borrow().values().cloned().collect();
        for watcher in watchers {
            watcher(Context::new(value.clone()));
        }
    }
}

impl<T: Clone + 'static> Signal for Binding<T> {
    type Output = T;
    type Guard = BindingGuard<T>;

    fn get(&self) -> T {
        Self::get(self)
    }

    fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> Self::Guard {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .watchers
            .borrow_mut()
            .insert(id, Rc::new(watcher));
        BindingGuard {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }
}

/// Keeps a [`Binding`] watcher registered until dropped.
pub struct BindingGuard<T> {
    shared: Weak<Shared<T>>,
    id: u64,
}

impl<T> fmt::Debug for BindingGuard<T> {
    fmt_type_name!();
}

impl<T> Drop for BindingGuard<T> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.watchers.borrow_mut().remove(&self.id);
        }
    }
}

impl<T: 'static> WatcherGuard for BindingGuard<T> {}

/// Creates a new [`Binding`] holding `value`.
pub fn binding<T>(value: T) -> Binding<T> {
    Binding::new(value)
}
