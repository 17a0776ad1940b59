//! Font configuration and the typographic presets of the kit.
//!
//! A [`Font`] is resolvable: concrete family, size, and weight come from
//! the environment (when a theme installs overrides) or from the preset's
//! built-in defaults. The presets correspond to the five text roles the
//! kit ships, all set in the Baloo Tamma 2 family.

use core::fmt::Debug;

use ripple_core::{
    Environment, Str,
    resolve::{self, AnyResolvable, Resolvable},
};
use ripple_reactive::{Computed, impl_constant};

/// Face names of the bundled Baloo Tamma 2 family.
pub mod family {
    /// Regular (weight 400).
    pub const REGULAR: &str = "BalooTamma2-Regular";
    /// Medium (weight 500).
    pub const MEDIUM: &str = "BalooTamma2-Medium";
    /// SemiBold (weight 600).
    pub const SEMI_BOLD: &str = "BalooTamma2-SemiBold";
    /// Bold (weight 700).
    pub const BOLD: &str = "BalooTamma2-Bold";
    /// ExtraBold (weight 800).
    pub const EXTRA_BOLD: &str = "BalooTamma2-ExtraBold";
}

/// Font configuration for text rendering.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Font(AnyResolvable<ResolvedFont>);

impl Default for Font {
    fn default() -> Self {
        Self::new(Body)
    }
}

/// A resolved font with a concrete family, size, and weight.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ResolvedFont {
    /// Font family (face) name.
    pub family: Str,
    /// Font size in points.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
}

impl ResolvedFont {
    /// Creates a resolved font.
    pub fn new(family: impl Into<Str>, size: f32, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }
}

/// Font weight enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Thin weight (100).
    Thin,
    /// Ultra-light weight (200).
    UltraLight,
    /// Light weight (300).
    Light,
    /// Normal weight (400).
    #[default]
    Normal,
    /// Medium weight (500).
    Medium,
    /// Semi-bold weight (600).
    SemiBold,
    /// Bold weight (700).
    Bold,
    /// Ultra-bold weight (800).
    UltraBold,
    /// Black weight (900).
    Black,
}

impl FontWeight {
    /// The numeric weight class (100–900).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::UltraLight => 200,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::UltraBold => 800,
            Self::Black => 900,
        }
    }
}

impl_constant!(Font, ResolvedFont, FontWeight);

impl Font {
    /// Creates a font from a resolvable value.
    pub fn new(font: impl Resolvable<Resolved = ResolvedFont> + 'static) -> Self {
        Self(AnyResolvable::new(font))
    }

    /// Sets the font family (face name).
    #[must_use]
    pub fn family(self, family: impl Into<Str>) -> Self {
        let family: Str = family.into();
        Self::new(resolve::Map::new(self.0, move |font: ResolvedFont| {
            ResolvedFont {
                family: family.clone(),
                ..font
            }
        }))
    }

    /// Sets the font size in points.
    #[must_use]
    pub fn size(self, size: f32) -> Self {
        Self::new(resolve::Map::new(self.0, move |font: ResolvedFont| {
            ResolvedFont { size, ..font }
        }))
    }

    /// Sets the font weight.
    #[must_use]
    pub fn weight(self, weight: FontWeight) -> Self {
        Self::new(resolve::Map::new(self.0, move |font: ResolvedFont| {
            ResolvedFont { weight, ..font }
        }))
    }

    /// Sets the font to bold weight.
    #[must_use]
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    /// Resolves the font in the given environment.
    #[must_use]
    pub fn resolve(&self, env: &Environment) -> Computed<ResolvedFont> {
        self.0.resolve(env)
    }
}

macro_rules! impl_font {
    ($name:ident, $family:expr, $size:expr, $weight:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Resolvable for $name {
            type Resolved = ResolvedFont;

            fn resolve(&self, env: &Environment) -> Computed<ResolvedFont> {
                env.query::<Self, Computed<Self::Resolved>>()
                    .cloned()
                    .unwrap_or_else(|| {
                        Computed::constant(ResolvedFont::new($family, $size, $weight))
                    })
            }
        }

        impl From<$name> for Font {
            fn from(value: $name) -> Self {
                Self::new(value)
            }
        }

        impl_constant!($name);
    };
}

impl_font!(
    Body,
    family::REGULAR,
    16.0,
    FontWeight::Normal,
    "Body text font preset."
);
impl_font!(
    BodyStrong,
    family::MEDIUM,
    16.0,
    FontWeight::SemiBold,
    "Emphasized body text font preset."
);
impl_font!(
    Title,
    family::EXTRA_BOLD,
    36.0,
    FontWeight::UltraBold,
    "Title font preset."
);
impl_font!(
    Subtitle,
    family::EXTRA_BOLD,
    24.0,
    FontWeight::UltraBold,
    "Subtitle font preset."
);
impl_font!(
    Link,
    family::REGULAR,
    16.0,
    FontWeight::Normal,
    "Link text font preset."
);
