//! The core read-only text component.

use core::fmt::Display;

use crate::font::{Font, FontWeight};
use crate::styled::StyledStr;
use alloc::string::ToString;
use ripple_core::configurable;
use ripple_reactive::signal::{IntoComputed, IntoSignal};
use ripple_reactive::{Computed, Signal, SignalExt, impl_constant};

configurable!(
    /// A view that displays one or more lines of read-only text.
    ///
    /// Text sizes itself to fit its content. Styling is carried per chunk
    /// of the underlying [`StyledStr`], so a single `Text` can mix fonts,
    /// sizes, and colors.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Simple text
    /// text("Hello, World!")
    ///
    /// // Styled text
    /// text("Important").bold().title()
    /// ```
    #[derive(Debug)]
    Text,
    TextConfig
);

/// Configuration for text components, consumed by rendering backends.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct TextConfig {
    /// The rich text content to be displayed.
    pub content: Computed<StyledStr>,
}

impl Clone for Text {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Default for Text {
    fn default() -> Self {
        text("")
    }
}

impl Text {
    /// Creates a new text component.
    pub fn new(content: impl IntoComputed<StyledStr>) -> Self {
        Self(TextConfig {
            content: content.into_computed(),
        })
    }

    /// Creates a text component from any type implementing `Display`.
    pub fn display<T: Display>(source: impl Signal<Output = T>) -> Self {
        Self::new(source.map(|value| value.to_string()).map(StyledStr::from))
    }

    /// Returns the computed content of this text component.
    #[must_use]
    pub fn content(&self) -> Computed<StyledStr> {
        self.0.content.clone()
    }

    /// Sets the font for this text component.
    #[must_use]
    pub fn font(mut self, font: impl IntoSignal<Font>) -> Self {
        let font = font.into_signal();
        self.0.content = self
            .0
            .content
            .zip(font)
            .map(|(content, font)| content.font(&font))
            .computed();
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn size(mut self, size: impl IntoSignal<f64>) -> Self {
        // Sizes are stored as f32; f64 keeps unsuffixed literals ergonomic.
        #[allow(clippy::cast_possible_truncation)]
        let size = size.into_signal().map(|size| size as f32);
        self.0.content = self
            .0
            .content
            .zip(size)
            .map(|(content, size)| content.size(size))
            .computed();
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn weight(mut self, weight: impl IntoSignal<FontWeight>) -> Self {
        let weight = weight.into_signal();
        self.0.content = self
            .0
            .content
            .zip(weight)
            .map(|(content, weight)| content.weight(weight))
            .computed();
        self
    }

    /// Sets the font to bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }
}

macro_rules! impl_text_font {
    ($(($name:ident, $value:expr)),+) => {
        $(
            impl Text {
                #[doc = concat!("Sets the font to the ", stringify!($name), " preset.")]
                #[must_use]
                pub fn $name(self) -> Self {
                    self.font($value)
                }
            }
        )+
    };
}

impl_text_font!(
    (body, crate::font::Body),
    (body_strong, crate::font::BodyStrong),
    (title, crate::font::Title),
    (subtitle, crate::font::Subtitle),
    (link, crate::font::Link)
);

/// Creates a new text component with the given content.
///
/// This is a convenience function equivalent to `Text::new(text)`.
#[must_use]
pub fn text(text: impl IntoComputed<StyledStr>) -> Text {
    Text::new(text)
}

impl<T> From<T> for Text
where
    T: IntoComputed<StyledStr>,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl_constant!(Text, TextConfig);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Body, family};
    use ripple_core::Environment;
    use ripple_reactive::binding;

    #[test]
    fn reactive_content_updates() {
        let source = binding("one");
        let view = Text::display(source.clone());
        let content = view.content();
        assert_eq!(content.get().to_plain(), "one");

        source.set("two");
        assert_eq!(content.get().to_plain(), "two");
    }

    #[test]
    fn size_applies_to_every_chunk() {
        let env = Environment::new();
        let view = text("hello").size(20.0);
        let chunks = view.content().get().into_chunks();
        for (_, style) in chunks {
            let resolved = style.font.resolve(&env).get();
            assert!((resolved.size - 20.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn preset_helpers_swap_the_font() {
        let env = Environment::new();
        let view = text("hello").font(Body);
        let chunks = view.content().get().into_chunks();
        let resolved = chunks[0].1.font.resolve(&env).get();
        assert_eq!(resolved.family, family::REGULAR);
    }
}
