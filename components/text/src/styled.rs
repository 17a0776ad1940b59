//! Styled text: per-chunk attributes for rich text content.

use core::fmt::Display;
use core::mem::take;

use alloc::{string::String, vec::Vec};

use crate::font::{Font, FontWeight};
use crate::text;
use ripple_color::Color;
use ripple_core::style::Vector;
use ripple_core::{Str, View};
use ripple_reactive::impl_constant;

/// A shadow rendered behind text glyphs.
#[derive(Debug, Clone)]
pub struct TextShadow {
    /// Shadow color.
    pub color: Color,
    /// Offset from the glyphs.
    pub offset: Vector<f32>,
    /// Blur radius in points.
    pub radius: f32,
}

impl TextShadow {
    /// Creates a text shadow.
    pub fn new(color: impl Into<Color>, offset: Vector<f32>, radius: f32) -> Self {
        Self {
            color: color.into(),
            offset,
            radius,
        }
    }
}

/// A set of text attributes applied to a chunk of styled text.
#[derive(Debug, Clone, Default)]
pub struct TextStyle {
    /// The font to use.
    pub font: Font,
    /// The foreground (text) color.
    pub foreground: Option<Color>,
    /// The background color.
    pub background: Option<Color>,
    /// Fixed line height in points, when set.
    pub line_height: Option<f32>,
    /// Shadow behind the glyphs, when set.
    pub shadow: Option<TextShadow>,
    /// Chunk opacity, when set.
    pub opacity: Option<f32>,
    /// Whether the text is italic.
    pub italic: bool,
    /// Whether the text has an underline.
    pub underline: bool,
}

impl TextStyle {
    /// Creates a new default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Sets the font size in points.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.font = self.font.size(size);
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font = self.font.weight(weight);
        self
    }

    /// Sets the font to bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.font = self.font.bold();
        self
    }

    /// Sets a fixed line height in points.
    #[must_use]
    pub const fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Sets a shadow behind the glyphs.
    #[must_use]
    pub fn shadow(mut self, shadow: TextShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Sets the chunk opacity.
    #[must_use]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the italic style.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets the underline style.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// A string with associated text attributes, chunk by chunk.
#[derive(Debug, Clone, Default)]
pub struct StyledStr {
    chunks: Vec<(Str, TextStyle)>,
}

impl StyledStr {
    /// Creates a new empty `StyledStr`.
    #[must_use]
    pub const fn empty() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Creates a plain styled string with a single unstyled chunk.
    #[must_use]
    pub fn plain(text: impl Into<Str>) -> Self {
        let mut styled = Self::empty();
        styled.push(text.into(), TextStyle::default());
        styled
    }

    /// Adds a new text chunk with the specified style.
    pub fn push(&mut self, text: impl Into<Str>, style: TextStyle) {
        self.chunks.push((text.into(), style));
    }

    /// Returns the number of chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the total content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.iter().map(|(text, _)| text.len()).sum()
    }

    /// Checks whether the styled string has no chunks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Concatenates the chunks into a plain string.
    #[must_use]
    pub fn to_plain(&self) -> Str {
        if self.chunks.len() == 1 {
            return self.chunks[0].0.clone();
        }

        let mut result = String::new();
        for (text, _) in &self.chunks {
            result.push_str(text);
        }
        result.into()
    }

    /// Consumes the styled string, returning its chunks.
    #[must_use]
    pub fn into_chunks(self) -> Vec<(Str, TextStyle)> {
        self.chunks
    }

    fn apply_style(mut self, f: impl Fn(&mut TextStyle)) -> Self {
        if self.chunks.is_empty() {
            return self;
        }
        let old_chunks = take(&mut self.chunks);
        for (text, mut style) in old_chunks {
            f(&mut style);
            self.push(text, style);
        }
        self
    }

    /// Sets the font size for all chunks.
    #[must_use]
    pub fn size(self, size: f32) -> Self {
        self.apply_style(|style| *style = take(style).size(size))
    }

    /// Sets the font for all chunks.
    #[must_use]
    pub fn font(self, font: &Font) -> Self {
        self.apply_style(|style| style.font = font.clone())
    }

    /// Sets the foreground color for all chunks.
    #[must_use]
    pub fn foreground(self, color: &Color) -> Self {
        self.apply_style(|style| style.foreground = Some(color.clone()))
    }

    /// Sets the font weight for all chunks.
    #[must_use]
    pub fn weight(self, weight: FontWeight) -> Self {
        self.apply_style(|style| *style = take(style).weight(weight))
    }

    /// Sets the font to bold for all chunks.
    #[must_use]
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }
}

impl View for StyledStr {
    fn body(self, _env: &ripple_core::Environment) -> impl View + use<> {
        text(self)
    }
}

impl Extend<(Str, TextStyle)> for StyledStr {
    fn extend<T: IntoIterator<Item = (Str, TextStyle)>>(&mut self, iter: T) {
        for (text, style) in iter {
            self.push(text, style);
        }
    }
}

impl From<Str> for StyledStr {
    fn from(value: Str) -> Self {
        Self::plain(value)
    }
}

impl From<&'static str> for StyledStr {
    fn from(value: &'static str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for StyledStr {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

impl Display for StyledStr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_plain())
    }
}

impl_constant!(TextStyle, StyledStr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_has_single_default_chunk() {
        let styled = StyledStr::plain("hello");
        assert_eq!(styled.chunk_count(), 1);
        assert_eq!(styled.to_plain(), "hello");
    }

    #[test]
    fn to_plain_concatenates_chunks() {
        let mut styled = StyledStr::empty();
        styled.push("A", TextStyle::new().size(110.0));
        styled.push("vocado", TextStyle::new().size(65.0));
        assert_eq!(styled.to_plain(), "Avocado");
        assert_eq!(styled.len(), 7);
    }

    #[test]
    fn apply_style_touches_every_chunk() {
        let mut styled = StyledStr::empty();
        styled.push("a", TextStyle::default());
        styled.push("b", TextStyle::default());

        let chunks = styled.size(20.0).into_chunks();
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn line_height_and_opacity_are_retained() {
        let style = TextStyle::new().line_height(30.0).opacity(0.96);
        assert_eq!(style.line_height, Some(30.0));
        assert_eq!(style.opacity, Some(0.96));
    }
}
