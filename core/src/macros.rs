/// Implements a basic `Debug` trait for types using their type name.
///
/// Useful for wrapper types whose internals carry no diagnostic value.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Implements a native view that is handled by the rendering backend.
///
/// The generated `View::body` wraps the value in
/// [`Native`](crate::Native); backends recognize the type by downcasting
/// and never call `body` on it.
///
/// ```ignore
/// raw_view!(Divider);
/// ```
#[macro_export]
macro_rules! raw_view {
    ($ty:ty) => {
        impl $crate::NativeView for $ty {}

        impl $crate::View for $ty {
            fn body(self, _env: &$crate::Environment) -> impl $crate::View + use<> {
                $crate::Native::new(self)
            }
        }
    };
}

/// Creates a configurable view with a backend-consumed configuration.
///
/// Generates the view wrapper struct plus the
/// [`ConfigurableView`](crate::view::ConfigurableView)/
/// [`ViewConfiguration`](crate::view::ViewConfiguration) pairing. The
/// generated `body` honors an environment-installed
/// [`Hook`](crate::view::Hook) before falling back to the native backend.
///
/// ```ignore
/// configurable!(
///     /// A view that displays read-only text.
///     Text,
///     TextConfig
/// );
/// ```
#[macro_export]
macro_rules! configurable {
    ($(#[$meta:meta])* $view:ident, $config:ty) => {
        $(#[$meta])*
        pub struct $view($config);

        impl $crate::NativeView for $config {}

        impl $crate::view::ConfigurableView for $view {
            type Config = $config;
            #[inline]
            fn config(self) -> Self::Config {
                self.0
            }
        }

        impl $crate::view::ViewConfiguration for $config {
            type View = $view;
            #[inline]
            fn render(self) -> Self::View {
                $view(self)
            }
        }

        impl From<$config> for $view {
            #[inline]
            fn from(value: $config) -> Self {
                Self(value)
            }
        }

        impl $crate::view::View for $view {
            fn body(self, env: &$crate::Environment) -> impl $crate::View + use<> {
                use $crate::view::ConfigurableView;
                let config = self.config();
                if let Some(hook) = env.get::<$crate::view::Hook<$config>>() {
                    hook.apply(env, config)
                } else {
                    $crate::AnyView::new($crate::Native::new(config))
                }
            }
        }
    };
}
