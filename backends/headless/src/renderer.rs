//! Walks a view tree and records the styled text it produces.

use ripple_color::ResolvedColor;
use ripple_core::env::WithEnv;
use ripple_core::style::Vector;
use ripple_core::view::ConfigurableView;
use ripple_core::{AnyView, Environment, Str, View};
use ripple_reactive::Signal;
use ripple_text::font::ResolvedFont;
use ripple_text::styled::TextStyle;
use ripple_text::{Text, TextConfig};

use crate::error::RenderError;

/// A fully resolved text shadow.
#[derive(Debug, Clone)]
pub struct ResolvedShadow {
    /// Shadow color.
    pub color: ResolvedColor,
    /// Offset from the glyphs.
    pub offset: Vector<f32>,
    /// Blur radius in points.
    pub radius: f32,
}

/// The resolved style of one rendered segment.
#[derive(Debug, Clone)]
pub struct SegmentStyle {
    /// Resolved font (family, size, weight).
    pub font: ResolvedFont,
    /// Foreground color, when set.
    pub foreground: Option<ResolvedColor>,
    /// Background color, when set.
    pub background: Option<ResolvedColor>,
    /// Fixed line height, when set.
    pub line_height: Option<f32>,
    /// Shadow behind the glyphs, when set.
    pub shadow: Option<ResolvedShadow>,
    /// Segment opacity, when set.
    pub opacity: Option<f32>,
    /// Whether the segment is italic.
    pub italic: bool,
    /// Whether the segment is underlined.
    pub underline: bool,
}

/// One run of uniformly styled text.
#[derive(Debug, Clone)]
pub struct RenderSegment {
    /// The text content.
    pub text: Str,
    /// The resolved style.
    pub style: SegmentStyle,
}

/// One rendered text element: a sequence of adjacent segments.
#[derive(Debug, Clone, Default)]
pub struct RenderLine {
    /// The segments of the line, in order.
    pub segments: Vec<RenderSegment>,
}

impl RenderLine {
    /// Concatenates the segment texts.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

/// The output of a headless render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// The rendered lines, in document order.
    pub lines: Vec<RenderLine>,
}

impl RenderFrame {
    /// Returns `true` when nothing was rendered.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenates all rendered text, one line per rendered element.
    #[must_use]
    pub fn text(&self) -> String {
        let mut output = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&line.text());
        }
        output
    }
}

/// Renders view trees into [`RenderFrame`]s without a display.
#[derive(Debug)]
pub struct Renderer {
    max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with the default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self { max_depth: 64 }
    }

    /// Renders a view against an environment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DepthExceeded`] when the view hierarchy
    /// does not terminate in native views within the depth limit.
    pub fn render(
        &mut self,
        env: &Environment,
        view: impl View,
    ) -> Result<RenderFrame, RenderError> {
        let mut frame = RenderFrame::default();
        self.render_any(env, &mut frame, 0, AnyView::new(view))?;
        Ok(frame)
    }

    fn render_any(
        &mut self,
        env: &Environment,
        frame: &mut RenderFrame,
        depth: usize,
        view: AnyView,
    ) -> Result<(), RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::DepthExceeded(self.max_depth));
        }

        // Unwrap nested erasure before matching on native views.
        let mut view = view;
        loop {
            match view.downcast::<AnyView>() {
                Ok(inner) => view = *inner,
                Err(other) => {
                    view = other;
                    break;
                }
            }
        }

        let view = match view.downcast::<()>() {
            Ok(_) => return Ok(()),
            Err(view) => view,
        };

        let view = match view.downcast::<WithEnv>() {
            Ok(with_env) => {
                let (content, inner_env) = with_env.into_parts();
                return self.render_any(&inner_env, frame, depth + 1, content);
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Str>() {
            Ok(text) => {
                Self::render_str(env, frame, &text);
                return Ok(());
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Text>() {
            Ok(text) => {
                Self::render_text(env, frame, &text.config());
                return Ok(());
            }
            Err(view) => view,
        };

        // Fallback: evaluate the view body and continue walking.
        tracing::trace!(view = view.name(), "descending into view body");
        let next = view.body(env);
        self.render_any(env, frame, depth + 1, AnyView::new(next))
    }

    fn render_str(env: &Environment, frame: &mut RenderFrame, text: &Str) {
        let style = Self::resolve_style(env, &TextStyle::default());
        frame.lines.push(RenderLine {
            segments: vec![RenderSegment {
                text: text.clone(),
                style,
            }],
        });
    }

    fn render_text(env: &Environment, frame: &mut RenderFrame, config: &TextConfig) {
        let content = config.content.get();
        let mut chunks = content.into_chunks();
        if chunks.is_empty() {
            chunks.push((Str::new(), TextStyle::default()));
        }

        let mut line = RenderLine::default();
        for (chunk, style) in chunks {
            line.segments.push(RenderSegment {
                text: chunk,
                style: Self::resolve_style(env, &style),
            });
        }
        frame.lines.push(line);
    }

    fn resolve_style(env: &Environment, style: &TextStyle) -> SegmentStyle {
        SegmentStyle {
            font: style.font.resolve(env).get(),
            foreground: style
                .foreground
                .as_ref()
                .map(|color| color.resolve(env).get()),
            background: style
                .background
                .as_ref()
                .map(|color| color.resolve(env).get()),
            line_height: style.line_height,
            shadow: style.shadow.as_ref().map(|shadow| ResolvedShadow {
                color: shadow.color.resolve(env).get(),
                offset: shadow.offset,
                radius: shadow.radius,
            }),
            opacity: style.opacity,
            italic: style.italic,
            underline: style.underline,
        }
    }
}
