//! Decorative starfield and nebula background.
//!
//! Two layers of drifting elements wrap around the viewport edges: small
//! stars and large radial-gradient nebula blobs. [`BackgroundAnimator`] holds
//! the element state, [`Backdrop`] ties it to a mount lifecycle and a
//! [`FrameScheduler`], and [`CellCanvas`] rasterizes the draw calls into
//! terminal cells. A stationary field of pulsing points can be drawn over
//! both layers.

mod animations;
mod backdrop;
mod canvas;
mod chars;
mod schedule;
mod state;
mod surface;

#[cfg(test)]
mod testing;

pub use animations::{
    AnimatorConfig, DEFAULT_PALETTE, NebulaSpawn, StarSpawn,
    nebula::{CORE_ALPHA, NebulaBlob},
    stars::Star,
    twinkle::TwinkleStar,
};
pub use backdrop::Backdrop;
pub use canvas::CellCanvas;
pub use schedule::{CancellationToken, FrameScheduler};
pub use state::BackgroundAnimator;
pub use surface::Surface;
