//! Colors that respond to the ambient light/dark scheme.

use ripple_core::{ColorScheme, Environment, resolve::Resolvable};
use ripple_reactive::Computed;

use crate::{Color, ResolvedColor};

/// A color with separate light and dark variants.
///
/// Resolution picks the variant matching the [`ColorScheme`] installed in
/// the environment, defaulting to the light variant.
#[derive(Debug, Clone)]
pub struct Adaptive {
    light: Color,
    dark: Color,
}

impl Adaptive {
    /// Creates an adaptive color from its light and dark variants.
    pub fn new(light: impl Into<Color>, dark: impl Into<Color>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }
}

impl Resolvable for Adaptive {
    type Resolved = ResolvedColor;

    fn resolve(&self, env: &Environment) -> Computed<ResolvedColor> {
        match ColorScheme::of(env) {
            ColorScheme::Light => self.light.resolve(env),
            ColorScheme::Dark => self.dark.resolve(env),
        }
    }
}
