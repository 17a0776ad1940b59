//! Text components and typography for the Ripple UI kit.
//!
//! This crate provides the text rendering stack: font presets and
//! resolution ([`font`]), chunked styled strings ([`styled`]), the core
//! [`Text`] view, the themed text element with variant presets and
//! drop-cap titles ([`themed`]), and custom font registration with load
//! gating ([`loader`]).

#![no_std]

extern crate alloc;

/// Font utilities and the kit's typographic presets.
pub mod font;
/// Custom font registration and load tracking.
pub mod loader;
/// Styled text support for rich text formatting.
pub mod styled;
/// Core text component.
pub mod text;
/// Themed text with variant presets and drop-cap titles.
pub mod themed;

pub use loader::{FontFace, FontLibrary, FontSource};
pub use text::{Text, TextConfig, text};
pub use themed::{TextVariant, ThemedContent, ThemedText, themed_text};
