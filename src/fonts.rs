//! Asset loading for custom fonts.
//!
//! A [`FontLibrary`](ripple_text::FontLibrary) tracks faces and
//! readiness but performs no IO. This module is the driver: it reads each
//! pending asset-backed face from disk and installs the data, so views
//! gated on the library start rendering once everything has arrived.
//!
//! Failures are absorbed per face: each one is logged, recorded on the
//! library (pinning it not-ready), and summarized in the returned error.
//! Text components never observe an error; they simply keep rendering
//! nothing.

use ripple_core::Str;
use ripple_text::{FontLibrary, FontSource};
use thiserror::Error;

/// Summary of font faces that failed to load.
#[derive(Debug, Error)]
#[error("failed to load {} font face(s)", .failed.len())]
pub struct FontLoadError {
    failed: Vec<Str>,
}

impl FontLoadError {
    /// Names of the faces that failed.
    #[must_use]
    pub fn faces(&self) -> &[Str] {
        &self.failed
    }
}

/// Loads every pending asset-backed face of `library` from disk.
///
/// Every face is attempted even when an earlier one fails.
///
/// # Errors
///
/// Returns a [`FontLoadError`] naming the faces whose assets could not
/// be read.
pub async fn load(library: &FontLibrary) -> Result<(), FontLoadError> {
    let mut failed = Vec::new();

    for face in library.pending() {
        let FontSource::Asset(path) = face.source().clone() else {
            continue;
        };
        match async_fs::read(path.as_str()).await {
            Ok(bytes) => {
                tracing::debug!(face = %face.name(), bytes = bytes.len(), "font face loaded");
                library.install(face.name(), bytes);
            }
            Err(error) => {
                tracing::warn!(face = %face.name(), path = %path, %error, "font face failed to load");
                library.mark_failed(face.name());
                failed.push(face.name().clone());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(FontLoadError { failed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use ripple_text::FontFace;
    use std::fs;

    fn asset_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("ripple-fonts-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp asset dir");
        dir
    }

    #[test]
    fn loads_faces_from_disk() {
        let dir = asset_dir("ok");
        let path = dir.join("Face.ttf");
        fs::write(&path, b"glyphs").expect("write asset");

        let library = FontLibrary::new([FontFace::asset(
            "Face",
            path.to_string_lossy().into_owned(),
        )]);
        assert!(!library.is_ready());

        block_on(load(&library)).expect("load succeeds");
        assert!(library.is_ready());
        assert_eq!(library.data("Face").as_deref(), Some(b"glyphs".as_slice()));
    }

    #[test]
    fn missing_asset_pins_the_library() {
        let dir = asset_dir("missing");
        let present = dir.join("Present.ttf");
        fs::write(&present, b"glyphs").expect("write asset");

        let library = FontLibrary::new([
            FontFace::asset("Present", present.to_string_lossy().into_owned()),
            FontFace::asset("Absent", dir.join("Absent.ttf").to_string_lossy().into_owned()),
        ]);

        let error = block_on(load(&library)).expect_err("absent face fails");
        assert_eq!(error.faces().len(), 1);
        assert_eq!(error.faces()[0], "Absent");
        assert!(!library.is_ready());
    }
}
