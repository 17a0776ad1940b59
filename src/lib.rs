//! A reactive mobile UI kit for Rust.
//!
//! `ripple` is the umbrella crate of the kit: it re-exports the core view
//! protocol, the reactive primitives, colors, and the text stack, and
//! adds the application-level pieces — theming, font asset loading, and
//! logging installation.
//!
//! The kit's standard text element is
//! [`ThemedText`](crate::text::ThemedText):
//!
//! ```ignore
//! use ripple::prelude::*;
//!
//! fn headline() -> impl View {
//!     themed_text("Avocado").variant(TextVariant::Title)
//! }
//! ```
//!
//! Custom fonts register through a
//! [`FontLibrary`](crate::text::FontLibrary) installed in the
//! environment; [`fonts::load`] drives the asset IO. Until every face has
//! loaded, themed text renders nothing.

pub use ripple_color as color;

pub use color::Color;

pub use ripple_text as text;

/// Asset loading for custom fonts.
pub mod fonts;
/// Tracing installation.
pub mod logging;
/// Application theming.
pub mod theme;

#[doc(inline)]
pub use ripple_core::{AnyView, Environment, Str, View, env};

pub use ripple_reactive as reactive;
#[doc(inline)]
pub use reactive::{Binding, Computed, Signal, SignalExt};

pub use tracing as log;

pub mod prelude {
    //! Commonly used traits and types, importable in one statement.

    pub use crate::color::Color;
    pub use crate::text::{
        FontFace, FontLibrary, Text, TextVariant, ThemedText, text, themed_text,
    };
    pub use crate::theme::{self, ColorScheme, Theme, ThemeColors};
    pub use crate::{AnyView, Environment, Str, View};
    pub use ripple_reactive::{Binding, Computed, Signal, SignalExt, binding};
}

/// Creates a text component with formatted content.
///
/// ```ignore
/// let label = text!("{} unread", count);
/// ```
#[macro_export]
macro_rules! text {
    ($($arg:tt)*) => {
        $crate::text::Text::new(::std::format!($($arg)*))
    };
}
