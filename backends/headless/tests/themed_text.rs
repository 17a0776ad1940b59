//! End-to-end rendering tests for the themed text element.

use futures::executor::block_on;
use ripple::prelude::*;
use ripple_color::Srgb;
use ripple_headless::{RenderFrame, Renderer};
use ripple_text::font::{FontWeight, family};

fn render(env: &Environment, view: impl View) -> RenderFrame {
    Renderer::new().render(env, view).expect("render succeeds")
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn title_renders_a_drop_cap() {
    let env = Environment::new();
    let frame = render(&env, themed_text("Avocado").variant(TextVariant::Title));

    assert_eq!(frame.lines.len(), 1);
    let segments = &frame.lines[0].segments;
    assert_eq!(segments.len(), 2);

    assert_eq!(segments[0].text, "A");
    assert!(close(segments[0].style.font.size, 110.0));
    assert_eq!(segments[0].style.font.family, family::EXTRA_BOLD);

    assert_eq!(segments[1].text, "vocado");
    assert!(close(segments[1].style.font.size, 65.0));
    assert_eq!(segments[1].style.font.family, family::EXTRA_BOLD);

    for segment in segments {
        let foreground = segment
            .style
            .foreground
            .as_ref()
            .expect("title text is colored");
        let white = Srgb::WHITE.resolve();
        assert!(close(foreground.red, white.red));

        let shadow = segment.style.shadow.as_ref().expect("title text is shadowed");
        assert!(close(shadow.offset.y, 13.0));
        assert!(close(shadow.radius, 20.0));
        assert!(close(shadow.color.opacity, 0.55));

        assert_eq!(segment.style.opacity, Some(0.96));
    }
}

#[test]
fn empty_title_still_renders_two_fragments() {
    let env = Environment::new();
    let frame = render(&env, themed_text(String::new()).variant(TextVariant::Title));

    let segments = &frame.lines[0].segments;
    assert_eq!(segments.len(), 2);
    assert!(segments[0].text.is_empty());
    assert!(segments[1].text.is_empty());
}

#[test]
fn link_text_uses_the_link_color() {
    let env = Environment::new();
    let frame = render(&env, themed_text("Click here").variant(TextVariant::Link));

    let segments = &frame.lines[0].segments;
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "Click here");
    assert!(close(segments[0].style.font.size, 16.0));
    assert_eq!(segments[0].style.font.family, family::REGULAR);

    let color = segments[0].style.foreground.as_ref().expect("links are colored");
    let expected = Srgb::from_hex("#0A7EA4").resolve();
    assert!(close(color.red, expected.red));
    assert!(close(color.green, expected.green));
    assert!(close(color.blue, expected.blue));
}

#[test]
fn size_override_derives_body_line_height() {
    let env = Environment::new();
    let frame = render(&env, themed_text("Hi").size(20.0));

    let segment = &frame.lines[0].segments[0];
    assert!(close(segment.style.font.size, 20.0));
    assert_eq!(segment.style.line_height, Some(30.0));
}

#[test]
fn semibold_body_keeps_weight_and_family() {
    let env = Environment::new();
    let frame = render(
        &env,
        themed_text("Hi").variant(TextVariant::DefaultSemiBold),
    );

    let segment = &frame.lines[0].segments[0];
    assert_eq!(segment.style.font.family, family::MEDIUM);
    assert_eq!(segment.style.font.weight, FontWeight::SemiBold);
    assert_eq!(segment.style.line_height, Some(24.0));
}

#[test]
fn nested_view_renders_unsplit() {
    let env = Environment::new();
    let frame = render(
        &env,
        ThemedText::view(text("inner")).variant(TextVariant::Title),
    );

    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.lines[0].segments.len(), 1);
    assert_eq!(frame.text(), "inner");
}

#[test]
fn color_overrides_follow_the_scheme() {
    let palette_light = theme::ThemeColors::light();
    let palette_dark = theme::ThemeColors::dark();
    let view = || {
        themed_text("Hi")
            .light_color(palette_light.text().clone())
            .dark_color(palette_dark.text().clone())
    };

    let light_env = Environment::new();
    let frame = render(&light_env, view());
    let color = frame.lines[0].segments[0]
        .style
        .foreground
        .clone()
        .expect("override applies");
    let expected = Srgb::from_u32(0x0011_181C).resolve();
    assert!(close(color.red, expected.red));

    let dark_env = Environment::new().with(ColorScheme::Dark);
    let frame = render(&dark_env, view());
    let color = frame.lines[0].segments[0]
        .style
        .foreground
        .clone()
        .expect("override applies");
    let expected = Srgb::from_u32(0x00EC_EDEE).resolve();
    assert!(close(color.red, expected.red));
}

#[test]
fn fonts_gate_rendering_until_loaded() {
    let dir = std::env::temp_dir().join(format!("ripple-headless-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp asset dir");

    let faces = [
        family::REGULAR,
        family::MEDIUM,
        family::SEMI_BOLD,
        family::BOLD,
        family::EXTRA_BOLD,
    ];
    let library = FontLibrary::new(faces.map(|name| {
        let path = dir.join(format!("{name}.ttf"));
        std::fs::write(&path, b"glyphs").expect("write asset");
        FontFace::asset(name, path.to_string_lossy().into_owned())
    }));

    let env = Environment::new().with(library.clone());

    // Every render pass before readiness yields nothing.
    for _ in 0..2 {
        let frame = render(&env, themed_text("Avocado").variant(TextVariant::Title));
        assert!(frame.is_blank());
    }

    block_on(ripple::fonts::load(&library)).expect("assets load");

    // Once ready, every subsequent pass renders.
    for _ in 0..2 {
        let frame = render(&env, themed_text("Avocado").variant(TextVariant::Title));
        assert_eq!(frame.text(), "Avocado");
        assert_eq!(frame.lines[0].segments.len(), 2);
    }
}

#[test]
fn missing_library_renders_immediately() {
    let env = Environment::new();
    let frame = render(&env, themed_text("Hi"));
    assert_eq!(frame.text(), "Hi");
}
