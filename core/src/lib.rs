//! Core functionality for the Ripple UI kit.
//!
//! This crate defines the protocol everything else builds on: the
//! [`View`] trait and [`AnyView`] erasure, the ambient [`Environment`],
//! the [`resolve`] pattern for theme-dependent values, native-view
//! plumbing for rendering backends, and the ambient [`ColorScheme`].

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

pub mod components;
pub mod env;
pub mod resolve;
pub mod scheme;
pub mod style;
pub mod view;

#[doc(inline)]
pub use components::native::{Native, NativeView};
#[doc(inline)]
pub use env::Environment;
#[doc(inline)]
pub use scheme::ColorScheme;
#[doc(inline)]
pub use view::{AnyView, View};

#[doc(inline)]
pub use ripple_str::Str;

// `Str` renders as a native text primitive.
raw_view!(Str);
