//! Core types shared across the Space Apps terminal site crates.

mod color;
mod settings;
mod viewport;

pub use color::Rgba;
pub use settings::{AnimationSpeed, BackgroundLayers};
pub use viewport::Viewport;
