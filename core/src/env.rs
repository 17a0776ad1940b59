//! The environment: ambient, typed configuration for view hierarchies.
//!
//! An [`Environment`] is a persistent map from types to values. Views read
//! ambient configuration from it (the active color scheme, installed
//! collaborators such as a font library, hooks) and parents extend it for
//! their children by cloning and inserting. Cloning is cheap: values are
//! reference counted.
//!
//! Two storage idioms coexist:
//!
//! - plain values keyed by their own type (`env.get::<ColorScheme>()`);
//! - marker-keyed values via [`Store`], so several entries of the same
//!   value type can live side by side (`env.query::<Title, Computed<_>>()`).

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;
use core::marker::PhantomData;

use crate::view::{AnyView, View};

/// A typed map of ambient values shared down a view hierarchy.
#[derive(Clone, Default)]
pub struct Environment {
    values: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("len", &self.values.len())
            .finish()
    }
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of type `T`, if one has been inserted.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref())
    }

    /// Inserts a value keyed by its own type, replacing any previous one.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Removes the value of type `T`, returning whether one was present.
    pub fn remove<T: 'static>(&mut self) -> bool {
        self.values.remove(&TypeId::of::<T>()).is_some()
    }

    /// Returns `true` if a value of type `T` is present.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Looks up a marker-keyed value stored via [`Store<K, V>`].
    #[must_use]
    pub fn query<K: 'static, V: 'static>(&self) -> Option<&V> {
        self.get::<Store<K, V>>().map(Store::value)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A value of type `V` stored in the environment under marker key `K`.
///
/// `K` is never instantiated; it only disambiguates entries that share a
/// value type, such as the per-token font signals installed by a theme.
pub struct Store<K, V> {
    value: V,
    _key: PhantomData<K>,
}

impl<K, V: fmt::Debug> fmt::Debug for Store<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Store").field(&self.value).finish()
    }
}

impl<K, V: Clone> Clone for Store<K, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _key: PhantomData,
        }
    }
}

impl<K, V> Store<K, V> {
    /// Wraps a value for storage under marker key `K`.
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _key: PhantomData,
        }
    }

    /// Borrows the stored value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Unwraps the stored value.
    pub fn into_value(self) -> V {
        self.value
    }
}

/// A view rendered against an explicit environment.
///
/// Rendering backends treat `WithEnv` as a terminal node: they swap in the
/// carried environment and continue with the content. This is how parents
/// hand extended environments to their children.
#[derive(Debug)]
pub struct WithEnv {
    content: AnyView,
    env: Environment,
}

impl WithEnv {
    /// Pairs content with the environment it should be rendered in.
    #[must_use]
    pub fn new(content: impl View, env: Environment) -> Self {
        Self {
            content: AnyView::new(content),
            env,
        }
    }

    /// Splits into content and environment.
    #[must_use]
    pub fn into_parts(self) -> (AnyView, Environment) {
        (self.content, self.env)
    }
}

crate::raw_view!(WithEnv);

/// A view that extends the ambient environment with one value.
pub struct With<V, T> {
    content: V,
    value: T,
}

impl<V, T> fmt::Debug for With<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

impl<V, T> With<V, T> {
    /// Associates `value` with `content` in the environment.
    pub const fn new(content: V, value: T) -> Self {
        Self { content, value }
    }
}

impl<V: View, T: 'static> View for With<V, T> {
    fn body(self, env: &Environment) -> impl View + use<V, T> {
        WithEnv::new(self.content, env.clone().with(self.value))
    }
}
