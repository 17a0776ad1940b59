//! Platform-handled native views.

use core::any::type_name;

use crate::env::Environment;
use crate::view::View;

/// A wrapper for views handled directly by a rendering backend.
///
/// # Panics
///
/// Rendering a `Native<T>` through `body` panics: backends are expected to
/// recognize the wrapped configuration by downcasting before descending.
#[derive(Debug)]
pub struct Native<T: NativeView>(pub T);

impl<T: NativeView> Native<T> {
    /// Wraps a backend-handled value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T: 'static + NativeView> View for Native<T> {
    #[allow(unreachable_code)]
    #[allow(clippy::needless_return)]
    fn body(self, _env: &Environment) -> impl View + use<T> {
        panic!("native view ({}) reached body()", type_name::<T>());
        return;
    }
}

/// Marker for all views handled by a rendering backend.
///
/// This covers configurable views (`Text`, …) and raw views (`Str`, the
/// empty view, environment carriers).
pub trait NativeView {}
