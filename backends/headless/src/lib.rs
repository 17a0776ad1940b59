#![allow(clippy::multiple_crate_versions)]

//! Headless rendering backend for the Ripple UI kit.
//!
//! Walks a view tree against an [`Environment`](ripple_core::Environment)
//! and records the styled text it produces, without a display. Used for
//! tests, tooling, and snapshotting component output.

pub use crate::renderer::{
    RenderFrame, RenderLine, RenderSegment, Renderer, ResolvedShadow, SegmentStyle,
};

mod error;
mod renderer;

pub use error::RenderError;
