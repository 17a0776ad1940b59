//! Ambient light/dark appearance.

use crate::env::Environment;

/// The ambient appearance a view hierarchy is rendered under.
///
/// Installed into the [`Environment`] by the host (or a theme provider);
/// absent a value, [`ColorScheme::Light`] is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorScheme {
    /// Reads the active scheme from an environment.
    #[must_use]
    pub fn of(env: &Environment) -> Self {
        env.get::<Self>().copied().unwrap_or_default()
    }

    /// Returns `true` for the dark appearance.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
