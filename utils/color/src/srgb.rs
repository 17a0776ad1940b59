//! Gamma-encoded sRGB colors and hex parsing.

use ripple_core::Environment;
use ripple_core::resolve::Resolvable;
use ripple_reactive::Computed;

use crate::{HexColorError, ResolvedColor, srgb_to_linear};

/// A gamma-encoded sRGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red component (gamma encoded).
    pub red: f32,
    /// Green component (gamma encoded).
    pub green: f32,
    /// Blue component (gamma encoded).
    pub blue: f32,
}

impl Srgb {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a color from gamma-encoded components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_u32(rgb: u32) -> Self {
        let red = ((rgb >> 16) & 0xFF) as u8;
        let green = ((rgb >> 8) & 0xFF) as u8;
        let blue = (rgb & 0xFF) as u8;
        Self::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
        )
    }

    /// Parses a six-digit hexadecimal color, with or without a `#` or
    /// `0x` prefix.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid six-digit hexadecimal color;
    /// use [`try_from_hex`](Self::try_from_hex) for fallible parsing.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        match Self::try_from_hex(hex) {
            Ok(color) => color,
            Err(error) => panic!("invalid hex color {hex:?}: {error}"),
        }
    }

    /// Parses a six-digit hexadecimal color, with or without a `#` or
    /// `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] when the digits are missing, malformed,
    /// or of the wrong length.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let offset = if let Some(rest) = hex.strip_prefix('#') {
            hex.len() - rest.len()
        } else if let Some(rest) = hex.strip_prefix("0x") {
            hex.len() - rest.len()
        } else {
            0
        };
        let digits = hex.as_bytes().get(offset..).unwrap_or_default();
        if digits.len() != 6 {
            return Err(HexColorError::InvalidLength);
        }

        let digit = |index: usize| -> Result<u8, HexColorError> {
            char::from(digits[index])
                .to_digit(16)
                .and_then(|value| u8::try_from(value).ok())
                .ok_or(HexColorError::InvalidDigit(offset + index))
        };

        let mut components = [0.0f32; 3];
        for (index, component) in components.iter_mut().enumerate() {
            let value = digit(index * 2)? * 16 + digit(index * 2 + 1)?;
            *component = f32::from(value) / 255.0;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }

    /// Converts into a [`ResolvedColor`] (linear components, opaque).
    #[must_use]
    pub fn resolve(&self) -> ResolvedColor {
        ResolvedColor {
            red: srgb_to_linear(self.red),
            green: srgb_to_linear(self.green),
            blue: srgb_to_linear(self.blue),
            opacity: 1.0,
        }
    }
}

impl Resolvable for Srgb {
    type Resolved = ResolvedColor;

    fn resolve(&self, _env: &Environment) -> Computed<ResolvedColor> {
        Computed::constant(Self::resolve(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_hex() {
        let direct = Srgb::from_hex("#0A7EA4");
        let prefixed = Srgb::from_hex("0x0A7EA4");
        let bare = Srgb::from_hex("0A7EA4");

        assert_eq!(direct, prefixed);
        assert_eq!(direct, bare);
        assert!((direct.red - f32::from(0x0A_u8) / 255.0).abs() < 1e-6);
        assert!((direct.green - f32::from(0x7E_u8) / 255.0).abs() < 1e-6);
        assert!((direct.blue - f32::from(0xA4_u8) / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Srgb::try_from_hex("#123"), Err(HexColorError::InvalidLength));
        assert_eq!(
            Srgb::try_from_hex("#GGGGGG"),
            Err(HexColorError::InvalidDigit(1))
        );
        assert_eq!(
            Srgb::try_from_hex("12345G"),
            Err(HexColorError::InvalidDigit(5))
        );
        // Six bytes of non-ASCII input is a digit error, not a panic.
        assert_eq!(
            Srgb::try_from_hex("€€"),
            Err(HexColorError::InvalidDigit(0))
        );
    }

    #[test]
    fn packed_u32_matches_hex() {
        assert_eq!(Srgb::from_u32(0x0A7E_A4), Srgb::from_hex("#0A7EA4"));
    }
}
