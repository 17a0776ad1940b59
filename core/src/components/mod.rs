//! Built-in view building blocks.

pub mod native;
