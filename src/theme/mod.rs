//! Application theming: the color palette and the ambient scheme.
//!
//! A [`Theme`] bundles the app's color tokens. The default theme is
//! adaptive: each token carries a light and a dark color and resolves
//! against the [`ColorScheme`] installed in the environment, so a single
//! palette serves both appearances.

pub use ripple_core::ColorScheme;

use ripple_color::Color;
use ripple_core::Environment;

/// The app's color tokens.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    text: Color,
    background: Color,
    tint: Color,
    icon: Color,
}

impl ThemeColors {
    /// Creates a palette from explicit tokens.
    #[must_use]
    pub const fn new(text: Color, background: Color, tint: Color, icon: Color) -> Self {
        Self {
            text,
            background,
            tint,
            icon,
        }
    }

    /// Palette for light surfaces.
    #[must_use]
    pub fn light() -> Self {
        Self::new(
            Color::srgb_u32(0x0011_181C),
            Color::srgb_u32(0x00FF_FFFF),
            Color::srgb_u32(0x000A_7EA4),
            Color::srgb_u32(0x0068_7076),
        )
    }

    /// Palette for dark surfaces.
    #[must_use]
    pub fn dark() -> Self {
        Self::new(
            Color::srgb_u32(0x00EC_EDEE),
            Color::srgb_u32(0x0015_1718),
            Color::srgb_u32(0x00FF_FFFF),
            Color::srgb_u32(0x009B_A1A6),
        )
    }

    /// Palette whose tokens resolve by the ambient [`ColorScheme`].
    #[must_use]
    pub fn adaptive() -> Self {
        let light = Self::light();
        let dark = Self::dark();
        Self::new(
            Color::adaptive(light.text, dark.text),
            Color::adaptive(light.background, dark.background),
            Color::adaptive(light.tint, dark.tint),
            Color::adaptive(light.icon, dark.icon),
        )
    }

    /// Primary text color.
    #[must_use]
    pub const fn text(&self) -> &Color {
        &self.text
    }

    /// Screen background color.
    #[must_use]
    pub const fn background(&self) -> &Color {
        &self.background
    }

    /// Accent color for interactive elements.
    #[must_use]
    pub const fn tint(&self) -> &Color {
        &self.tint
    }

    /// Default icon color.
    #[must_use]
    pub const fn icon(&self) -> &Color {
        &self.icon
    }
}

/// Top-level theme data.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: ThemeColors,
}

impl Theme {
    /// Creates a theme from a palette.
    #[must_use]
    pub const fn new(colors: ThemeColors) -> Self {
        Self { colors }
    }

    /// Theme pinned to the light palette.
    #[must_use]
    pub fn light() -> Self {
        Self::new(ThemeColors::light())
    }

    /// Theme pinned to the dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self::new(ThemeColors::dark())
    }

    /// Theme that follows the ambient [`ColorScheme`].
    #[must_use]
    pub fn adaptive() -> Self {
        Self::new(ThemeColors::adaptive())
    }

    /// Accesses the color palette.
    #[must_use]
    pub const fn colors(&self) -> &ThemeColors {
        &self.colors
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::adaptive()
    }
}

/// Retrieves the theme stored in the environment, or the default.
#[must_use]
pub fn theme(env: &Environment) -> Theme {
    env.get::<Theme>().cloned().unwrap_or_default()
}
