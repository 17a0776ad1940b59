//! Color types for the Ripple UI kit.
//!
//! The primary type is [`Color`]: a resolvable color value that may come
//! from a fixed sRGB value, a hex literal, or an adaptive light/dark pair.
//! Resolution happens against an [`Environment`] and yields a
//! [`ResolvedColor`] with linear components, so theme- and
//! scheme-dependent colors stay reactive until a backend reads them.

extern crate alloc;

mod adaptive;
pub use adaptive::Adaptive;
mod srgb;
pub use srgb::Srgb;

use core::fmt::{self, Display};

use ripple_core::Environment;
use ripple_core::resolve::{self, AnyResolvable, Resolvable};
use ripple_reactive::{Computed, impl_constant};

/// A color value resolved against the environment.
#[derive(Debug, Clone)]
pub struct Color(AnyResolvable<ResolvedColor>);

impl Default for Color {
    fn default() -> Self {
        Self::srgb(0, 0, 0)
    }
}

impl<T: Resolvable<Resolved = ResolvedColor> + 'static> From<T> for Color {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The string does not contain exactly 6 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character at the given byte index.
    InvalidDigit(usize),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected exactly 6 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
        }
    }
}

impl core::error::Error for HexColorError {}

/// A resolved color: linear sRGB components plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    /// Red component in linear RGB.
    pub red: f32,
    /// Green component in linear RGB.
    pub green: f32,
    /// Blue component in linear RGB.
    pub blue: f32,
    /// Opacity (0.0 = transparent, 1.0 = opaque).
    pub opacity: f32,
}

impl ResolvedColor {
    /// Converts from a gamma-encoded sRGB color.
    #[must_use]
    pub fn from_srgb(color: Srgb) -> Self {
        color.resolve()
    }

    /// Converts back into gamma-encoded sRGB, dropping opacity.
    #[must_use]
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            linear_to_srgb(self.red),
            linear_to_srgb(self.green),
            linear_to_srgb(self.blue),
        )
    }

    /// Returns a copy with the given opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl_constant!(Color, ResolvedColor);

impl Color {
    /// Creates a color from a custom resolvable value.
    pub fn new(custom: impl Resolvable<Resolved = ResolvedColor> + 'static) -> Self {
        Self(AnyResolvable::new(custom))
    }

    fn map_resolved(self, func: impl Fn(ResolvedColor) -> ResolvedColor + Clone + 'static) -> Self {
        Self::new(resolve::Map::new(self.0, func))
    }

    /// Creates an sRGB color from 8-bit components.
    #[must_use]
    pub fn srgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(Srgb::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
        ))
    }

    /// Creates an sRGB color from floating-point components.
    #[must_use]
    pub fn srgb_f32(red: f32, green: f32, blue: f32) -> Self {
        Self::new(Srgb::new(red, green, blue))
    }

    /// Creates an sRGB color from a hexadecimal string.
    ///
    /// # Panics
    ///
    /// Panics when the string is not a six-digit hexadecimal color.
    #[must_use]
    pub fn srgb_hex(hex: &str) -> Self {
        Self::new(Srgb::from_hex(hex))
    }

    /// Tries to create an sRGB color from a hexadecimal string.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] for malformed input.
    pub fn try_srgb_hex(hex: &str) -> Result<Self, HexColorError> {
        Srgb::try_from_hex(hex).map(Self::from)
    }

    /// Creates an sRGB color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn srgb_u32(rgb: u32) -> Self {
        Self::from(Srgb::from_u32(rgb))
    }

    /// Creates a color with separate light and dark variants.
    #[must_use]
    pub fn adaptive(light: impl Into<Self>, dark: impl Into<Self>) -> Self {
        Self::new(Adaptive::new(light, dark))
    }

    /// Opaque white.
    #[must_use]
    pub fn white() -> Self {
        Self::from(Srgb::WHITE)
    }

    /// Opaque black.
    #[must_use]
    pub fn black() -> Self {
        Self::from(Srgb::BLACK)
    }

    /// A fully transparent color.
    #[must_use]
    pub fn transparent() -> Self {
        Self::black().with_opacity(0.0)
    }

    /// Returns this color with the given opacity applied.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let clamped = opacity.clamp(0.0, 1.0);
        self.map_resolved(move |resolved| resolved.with_opacity(clamped))
    }

    /// Resolves this color in the given environment.
    #[must_use]
    pub fn resolve(&self, env: &Environment) -> Computed<ResolvedColor> {
        self.0.resolve(env)
    }
}

// https://www.w3.org/TR/css-color-4/#color-conversion-code
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055_f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_reactive::Signal;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn srgb_linear_roundtrip() {
        let samples = [0.0_f32, 0.001, 0.02, 0.25, 0.5, 1.0];

        for value in samples {
            let linear = srgb_to_linear(value);
            let recon = linear_to_srgb(linear);
            assert!(
                approx_eq(value, recon, EPSILON),
                "value {value} recon {recon}"
            );
        }
    }

    #[test]
    fn srgb_resolve_matches_linear_components() {
        let color = Srgb::from_hex("#4CAF50");
        let resolved = color.resolve();

        assert!(approx_eq(resolved.red, srgb_to_linear(color.red), EPSILON));
        assert!(approx_eq(
            resolved.green,
            srgb_to_linear(color.green),
            EPSILON
        ));
        assert!(approx_eq(resolved.blue, srgb_to_linear(color.blue), EPSILON));
        assert!(approx_eq(resolved.opacity, 1.0, EPSILON));
    }

    #[test]
    fn resolved_color_roundtrips_to_srgb() {
        let source = Srgb::from_hex("#0A7EA4");
        let roundtrip = source.resolve().to_srgb();
        assert!(approx_eq(source.red, roundtrip.red, 1e-3));
        assert!(approx_eq(source.green, roundtrip.green, 1e-3));
        assert!(approx_eq(source.blue, roundtrip.blue, 1e-3));
    }

    #[test]
    fn opacity_is_applied_and_clamped() {
        let env = Environment::new();
        let faded = Color::white().with_opacity(0.55).resolve(&env).get();
        assert!(approx_eq(faded.opacity, 0.55, EPSILON));

        let clamped = Color::white().with_opacity(4.0).resolve(&env).get();
        assert!(approx_eq(clamped.opacity, 1.0, EPSILON));
    }

    #[test]
    fn transparent_color_has_zero_opacity() {
        let env = Environment::new();
        let transparent = Color::transparent().resolve(&env).get();
        assert!(approx_eq(transparent.opacity, 0.0, EPSILON));
    }
}
