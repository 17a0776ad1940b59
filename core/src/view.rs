//! The view protocol: composable descriptions of UI.
//!
//! A type implementing [`View`] is a *description* of a piece of UI, not a
//! live widget. Rendering asks the description for its [`body`](View::body)
//! against an [`Environment`], recursively, until native views remain for a
//! backend to consume. [`AnyView`] erases concrete view types so backends
//! and containers can hold heterogeneous children and recover the concrete
//! native configurations by downcasting.

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use alloc::rc::Rc;

use crate::env::Environment;

/// A description of a piece of user interface.
///
/// `body` consumes the description and returns the next, lower-level
/// description. Native views (produced by [`raw_view!`](crate::raw_view)
/// and [`configurable!`](crate::configurable)) terminate the recursion and
/// are handled by rendering backends directly.
pub trait View: 'static {
    /// Resolves this view one level, in the given environment.
    fn body(self, env: &Environment) -> impl View + use<Self>;
}

trait AnyViewImpl: 'static {
    fn render(self: Box<Self>, env: &Environment) -> AnyView;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn name(&self) -> &'static str;
}

impl<V: View> AnyViewImpl for V {
    fn render(self: Box<Self>, env: &Environment) -> AnyView {
        AnyView::new((*self).body(env))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn name(&self) -> &'static str {
        core::any::type_name::<V>()
    }
}

/// A type-erased view.
pub struct AnyView(Box<dyn AnyViewImpl>);

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyView").field(&self.0.name()).finish()
    }
}

impl AnyView {
    /// Erases a concrete view.
    #[must_use]
    pub fn new(view: impl View) -> Self {
        Self(Box::new(view))
    }

    /// Attempts to recover the concrete view, returning `self` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns the untouched `AnyView` when it does not wrap a `T`.
    pub fn downcast<T: View>(self) -> Result<Box<T>, Self> {
        if self.0.as_any().is::<T>() {
            let any = self.0.into_any();
            Ok(any.downcast().expect("checked by is::<T>"))
        } else {
            Err(self)
        }
    }

    /// Borrows the wrapped view as a `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: View>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// The type name of the wrapped view, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl View for AnyView {
    fn body(self, env: &Environment) -> impl View + use<> {
        self.0.render(env)
    }
}

/// A view whose configuration is handed to a backend for rendering.
///
/// Generated by the [`configurable!`](crate::configurable) macro together
/// with [`ViewConfiguration`].
pub trait ConfigurableView: View {
    /// The configuration consumed by backends.
    type Config: 'static;

    /// Unwraps the configuration.
    fn config(self) -> Self::Config;
}

/// The configuration side of a [`ConfigurableView`].
pub trait ViewConfiguration: 'static {
    /// The view this configuration renders as.
    type View: ConfigurableView<Config = Self>;

    /// Wraps the configuration back into its view.
    fn render(self) -> Self::View;
}

/// An environment-installed override for a configurable view.
///
/// When a `Hook<Config>` is present in the environment, the view hands its
/// configuration to the hook instead of the native backend. Tests and
/// adapters use this to intercept rendering.
pub struct Hook<C> {
    apply: Rc<dyn Fn(&Environment, C) -> AnyView>,
}

impl<C> Clone for Hook<C> {
    fn clone(&self) -> Self {
        Self {
            apply: Rc::clone(&self.apply),
        }
    }
}

impl<C> fmt::Debug for Hook<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

impl<C: 'static> Hook<C> {
    /// Wraps a function replacing the native rendering of `C`.
    pub fn new(apply: impl Fn(&Environment, C) -> AnyView + 'static) -> Self {
        Self {
            apply: Rc::new(apply),
        }
    }

    /// Applies the hook to a configuration.
    #[must_use]
    pub fn apply(&self, env: &Environment, config: C) -> AnyView {
        (self.apply)(env, config)
    }
}

// The empty view: renders nothing. Backends treat it as a terminal node.
crate::raw_view!(());

impl View for &'static str {
    fn body(self, _env: &Environment) -> impl View + use<> {
        ripple_str::Str::from(self)
    }
}

impl View for alloc::string::String {
    fn body(self, _env: &Environment) -> impl View + use<> {
        ripple_str::Str::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_str::Str;

    #[test]
    fn downcast_recovers_concrete_view() {
        let erased = AnyView::new(Str::from("hi"));
        let recovered = erased.downcast::<Str>().map(|s| *s);
        assert_eq!(recovered.ok().as_deref(), Some("hi"));
    }

    #[test]
    fn downcast_mismatch_returns_original() {
        let erased = AnyView::new(Str::from("hi"));
        let err = erased.downcast::<()>().err();
        assert!(err.is_some_and(|view| view.downcast_ref::<Str>().is_some()));
    }

    #[test]
    fn str_body_resolves_to_native_str() {
        let env = Environment::new();
        let resolved = AnyView::new("plain".body(&env));
        assert!(resolved.downcast_ref::<Str>().is_some());
    }
}
