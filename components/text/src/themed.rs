//! Themed text: variant presets, adaptive colors, and drop-cap titles.
//!
//! [`ThemedText`] is the kit's standard text element. It picks fonts and
//! attributes from a [`TextVariant`] preset, honors an explicit size
//! override, selects light/dark color overrides by the ambient
//! [`ColorScheme`], and renders titles with an oversized leading
//! character. Rendering is gated on the [`FontLibrary`] installed in the
//! environment: until every custom face has loaded, the component yields
//! the empty view and re-samples readiness on the next render pass.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use ripple_color::Color;
use ripple_core::style::Vector;
use ripple_core::{AnyView, ColorScheme, Environment, Str, View};

use crate::font::{Body, BodyStrong, Font, Link, Subtitle, Title, family};
use crate::loader::FontLibrary;
use crate::styled::{StyledStr, TextShadow, TextStyle};
use crate::text::Text;

/// Typographic presets for [`ThemedText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextVariant {
    /// Body text.
    #[default]
    Default,
    /// Emphasized body text.
    DefaultSemiBold,
    /// Large display title with a drop-cap treatment for plain text.
    Title,
    /// Section subtitle.
    Subtitle,
    /// Tappable link text.
    Link,
}

/// Default size of the oversized leading character in titles.
const DROP_CAP_FIRST_SIZE: f32 = 110.0;
/// Default size of the remainder of a title after the leading character.
const DROP_CAP_REST_SIZE: f32 = 65.0;
/// Line height derived from an explicit size for body variants.
const LINE_HEIGHT_FACTOR: f32 = 1.5;
/// Fixed line height of body variants at their default size.
const BODY_LINE_HEIGHT: f32 = 24.0;
/// Opacity applied to title text.
const TITLE_OPACITY: f32 = 0.96;

fn title_shadow() -> TextShadow {
    TextShadow::new(
        Color::srgb(1, 1, 1).with_opacity(0.55),
        Vector::new(0.0, 13.0),
        20.0,
    )
}

fn link_color() -> Color {
    Color::srgb_u32(0x000A_7EA4)
}

impl TextVariant {
    /// The font preset this variant renders with.
    #[must_use]
    pub fn font(self) -> Font {
        match self {
            Self::Default => Body.into(),
            Self::DefaultSemiBold => BodyStrong.into(),
            Self::Title => Title.into(),
            Self::Subtitle => Subtitle.into(),
            Self::Link => Link.into(),
        }
    }

    /// The full attribute set for this variant, with `size` layered over
    /// the preset when present.
    #[must_use]
    pub fn style(self, size: Option<f32>) -> TextStyle {
        let mut font = self.font();
        if let Some(size) = size {
            font = font.size(size);
        }
        let style = TextStyle::new().font(font);
        match self {
            Self::Default | Self::DefaultSemiBold => {
                style.line_height(size.map_or(BODY_LINE_HEIGHT, |size| size * LINE_HEIGHT_FACTOR))
            }
            Self::Title => style
                .foreground(Color::white())
                .shadow(title_shadow())
                .opacity(TITLE_OPACITY),
            Self::Subtitle => style,
            Self::Link => style.foreground(link_color()),
        }
    }
}

/// Content accepted by [`ThemedText`]: plain text or a nested view.
#[derive(Debug)]
pub enum ThemedContent {
    /// Plain text, eligible for the title drop-cap treatment.
    Plain(Str),
    /// An arbitrary nested view, rendered as-is.
    View(AnyView),
}

impl From<Str> for ThemedContent {
    fn from(value: Str) -> Self {
        Self::Plain(value)
    }
}

impl From<&'static str> for ThemedContent {
    fn from(value: &'static str) -> Self {
        Self::Plain(value.into())
    }
}

impl From<String> for ThemedContent {
    fn from(value: String) -> Self {
        Self::Plain(value.into())
    }
}

impl From<AnyView> for ThemedContent {
    fn from(value: AnyView) -> Self {
        Self::View(value)
    }
}

/// Text styled by a [`TextVariant`] preset.
///
/// ```ignore
/// themed_text("Avocado").variant(TextVariant::Title)
/// themed_text("Click here")
///     .variant(TextVariant::Link)
///     .light_color(Color::srgb_hex("#0A7EA4"))
/// ```
pub struct ThemedText {
    content: ThemedContent,
    variant: TextVariant,
    size: Option<f32>,
    light_color: Option<Color>,
    dark_color: Option<Color>,
    style: Option<Rc<dyn Fn(TextStyle) -> TextStyle>>,
}

impl fmt::Debug for ThemedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemedText")
            .field("content", &self.content)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .finish()
    }
}

impl ThemedText {
    /// Creates themed text from plain content or an erased view.
    pub fn new(content: impl Into<ThemedContent>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::default(),
            size: None,
            light_color: None,
            dark_color: None,
            style: None,
        }
    }

    /// Creates themed text wrapping a nested view.
    pub fn view(content: impl View) -> Self {
        Self::new(AnyView::new(content))
    }

    /// Selects the typographic variant.
    #[must_use]
    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Overrides the font size.
    ///
    /// Body variants derive their line height from the override; the
    /// title variant applies it to both drop-cap fragments.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Text color used under the light scheme.
    #[must_use]
    pub fn light_color(mut self, color: impl Into<Color>) -> Self {
        self.light_color = Some(color.into());
        self
    }

    /// Text color used under the dark scheme.
    #[must_use]
    pub fn dark_color(mut self, color: impl Into<Color>) -> Self {
        self.dark_color = Some(color.into());
        self
    }

    /// Final style override, applied after every computed layer.
    #[must_use]
    pub fn style(mut self, f: impl Fn(TextStyle) -> TextStyle + 'static) -> Self {
        self.style = Some(Rc::new(f));
        self
    }
}

/// Creates a [`ThemedText`] from plain content or an erased view.
#[must_use]
pub fn themed_text(content: impl Into<ThemedContent>) -> ThemedText {
    ThemedText::new(content)
}

/// Splits off the first `char` of `content`.
///
/// The split is by Unicode scalar value, not grapheme cluster: combining
/// marks stay with the remainder. Empty input yields two empty pieces.
fn split_leading_char(content: &Str) -> (Str, Str) {
    let text = content.as_str();
    let Some(first) = text.chars().next() else {
        return (Str::new(), Str::new());
    };
    let boundary = first.len_utf8();
    (
        Str::from(String::from(&text[..boundary])),
        Str::from(String::from(&text[boundary..])),
    )
}

/// The style of one drop-cap fragment: the title attributes with the
/// drop-cap face and an explicit size.
fn fragment_style(base: &TextStyle, size: f32) -> TextStyle {
    let mut style = base.clone();
    style.font = style.font.family(family::EXTRA_BOLD).size(size);
    style
}

fn scheme_color(
    scheme: ColorScheme,
    light: Option<Color>,
    dark: Option<Color>,
) -> Option<Color> {
    match (light, dark) {
        (Some(light), Some(dark)) => Some(Color::adaptive(light, dark)),
        (Some(light), None) if !scheme.is_dark() => Some(light),
        (None, Some(dark)) if scheme.is_dark() => Some(dark),
        _ => None,
    }
}

impl View for ThemedText {
    fn body(self, env: &Environment) -> impl View + use<> {
        // Hold rendering until the installed font library reports every
        // face loaded. Each render pass re-samples the flag; the flag
        // itself never regresses.
        if let Some(library) = env.get::<FontLibrary>() {
            if !library.is_ready() {
                return AnyView::new(());
            }
        }

        let Self {
            content,
            variant,
            size,
            light_color,
            dark_color,
            style,
        } = self;

        let plain = match content {
            // Nested views render unsplit and unstyled; their own
            // description governs their appearance.
            ThemedContent::View(view) => return view,
            ThemedContent::Plain(plain) => plain,
        };

        let color_override = scheme_color(ColorScheme::of(env), light_color, dark_color);
        let finish = |mut chunk: TextStyle| -> TextStyle {
            if let Some(color) = &color_override {
                chunk.foreground = Some(color.clone());
            }
            match &style {
                Some(hook) => hook(chunk),
                None => chunk,
            }
        };

        let mut styled = StyledStr::empty();
        if variant == TextVariant::Title {
            // Drop cap: exactly two fragments, first scalar and the
            // remainder, independently sized.
            let base = variant.style(None);
            let (first, rest) = split_leading_char(&plain);
            styled.push(
                first,
                finish(fragment_style(&base, size.unwrap_or(DROP_CAP_FIRST_SIZE))),
            );
            styled.push(
                rest,
                finish(fragment_style(&base, size.unwrap_or(DROP_CAP_REST_SIZE))),
            );
        } else {
            styled.push(plain, finish(variant.style(size)));
        }

        AnyView::new(Text::new(styled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::FontFace;
    use ripple_reactive::Signal;

    fn resolve_once(view: impl View, env: &Environment) -> AnyView {
        let mut view = AnyView::new(view.body(env));
        loop {
            match view.downcast::<AnyView>() {
                Ok(inner) => view = *inner,
                Err(view) => return view,
            }
        }
    }

    fn rendered_chunks(view: ThemedText, env: &Environment) -> alloc::vec::Vec<(Str, TextStyle)> {
        use ripple_core::view::ConfigurableView;
        let text = resolve_once(view, env)
            .downcast::<Text>()
            .expect("themed text resolves to a text view");
        text.config().content.get().into_chunks()
    }

    #[test]
    fn splits_on_scalar_boundaries() {
        assert_eq!(
            split_leading_char(&Str::from("Avocado")),
            (Str::from("A"), Str::from("vocado"))
        );
        assert_eq!(
            split_leading_char(&Str::from("Å")),
            (Str::from("Å"), Str::new())
        );
        assert_eq!(split_leading_char(&Str::new()), (Str::new(), Str::new()));

        // Combining marks stay with the remainder.
        let (first, rest) = split_leading_char(&Str::from("e\u{301}x"));
        assert_eq!(first, "e");
        assert_eq!(rest, "\u{301}x");
    }

    #[test]
    fn body_variants_derive_line_height() {
        let unsized_style = TextVariant::Default.style(None);
        assert_eq!(unsized_style.line_height, Some(24.0));

        let sized = TextVariant::Default.style(Some(20.0));
        assert_eq!(sized.line_height, Some(30.0));

        let strong = TextVariant::DefaultSemiBold.style(Some(10.0));
        assert_eq!(strong.line_height, Some(15.0));
    }

    #[test]
    fn display_variants_skip_line_height() {
        assert!(TextVariant::Title.style(None).line_height.is_none());
        assert!(TextVariant::Subtitle.style(Some(40.0)).line_height.is_none());
        assert!(TextVariant::Link.style(Some(40.0)).line_height.is_none());
    }

    #[test]
    fn variant_fonts_resolve_to_presets() {
        let env = Environment::new();
        let cases = [
            (TextVariant::Default, family::REGULAR, 16.0),
            (TextVariant::DefaultSemiBold, family::MEDIUM, 16.0),
            (TextVariant::Title, family::EXTRA_BOLD, 36.0),
            (TextVariant::Subtitle, family::EXTRA_BOLD, 24.0),
            (TextVariant::Link, family::REGULAR, 16.0),
        ];
        for (variant, expected_family, expected_size) in cases {
            let font = variant.style(None).font.resolve(&env).get();
            assert_eq!(font.family, expected_family, "{variant:?}");
            assert!(
                (font.size - expected_size).abs() < f32::EPSILON,
                "{variant:?}"
            );
        }
    }

    #[test]
    fn title_renders_two_fragments() {
        let env = Environment::new();
        let chunks = rendered_chunks(
            themed_text("Avocado").variant(TextVariant::Title),
            &env,
        );

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].0, "A");
        assert_eq!(chunks[1].0, "vocado");

        let first = chunks[0].1.font.resolve(&env).get();
        assert!((first.size - 110.0).abs() < f32::EPSILON);
        assert_eq!(first.family, family::EXTRA_BOLD);

        let rest = chunks[1].1.font.resolve(&env).get();
        assert!((rest.size - 65.0).abs() < f32::EPSILON);
        assert_eq!(rest.family, family::EXTRA_BOLD);
    }

    #[test]
    fn title_single_character_keeps_empty_remainder() {
        let env = Environment::new();
        let chunks = rendered_chunks(themed_text("A").variant(TextVariant::Title), &env);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].0, "A");
        assert!(chunks[1].0.is_empty());
    }

    #[test]
    fn size_override_applies_to_both_fragments() {
        let env = Environment::new();
        let chunks = rendered_chunks(
            themed_text("Avocado").variant(TextVariant::Title).size(48.0),
            &env,
        );
        for (_, style) in chunks {
            let font = style.font.resolve(&env).get();
            assert!((font.size - 48.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn title_with_nested_view_passes_through() {
        let env = Environment::new();
        let nested = themed_text(AnyView::new(Str::from("inner"))).variant(TextVariant::Title);
        let resolved = resolve_once(nested, &env);
        assert!(resolved.downcast_ref::<Str>().is_some());
    }

    #[test]
    fn non_title_variants_render_one_chunk() {
        let env = Environment::new();
        for variant in [
            TextVariant::Default,
            TextVariant::DefaultSemiBold,
            TextVariant::Subtitle,
            TextVariant::Link,
        ] {
            let chunks = rendered_chunks(themed_text("Avocado").variant(variant), &env);
            assert_eq!(chunks.len(), 1, "{variant:?}");
            assert_eq!(chunks[0].0, "Avocado");
        }
    }

    #[test]
    fn renders_nothing_until_fonts_load() {
        let library = FontLibrary::new([FontFace::asset("A", "fonts/a.ttf")]);
        let env = Environment::new().with(library.clone());

        let pending = resolve_once(themed_text("Hi"), &env);
        assert!(pending.downcast_ref::<()>().is_some());

        library.mark_loaded("A");
        let ready = resolve_once(themed_text("Hi"), &env);
        assert!(ready.downcast_ref::<Text>().is_some());
    }

    #[test]
    fn scheme_override_selection() {
        let light = Color::srgb_u32(0x11_181C);
        let dark = Color::srgb_u32(0xECED_EE);

        assert!(scheme_color(ColorScheme::Light, Some(light.clone()), None).is_some());
        assert!(scheme_color(ColorScheme::Dark, Some(light.clone()), None).is_none());
        assert!(scheme_color(ColorScheme::Dark, None, Some(dark.clone())).is_some());
        assert!(scheme_color(ColorScheme::Light, None, Some(dark.clone())).is_none());
        assert!(scheme_color(ColorScheme::Dark, Some(light), Some(dark)).is_some());
        assert!(scheme_color(ColorScheme::Light, None, None).is_none());
    }

    #[test]
    fn style_hook_wins_last() {
        let env = Environment::new();
        let chunks = rendered_chunks(
            themed_text("Hi")
                .variant(TextVariant::Link)
                .style(|style| style.line_height(99.0)),
            &env,
        );
        assert_eq!(chunks[0].1.line_height, Some(99.0));
    }
}
