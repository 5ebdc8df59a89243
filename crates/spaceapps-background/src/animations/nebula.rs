//! Nebula layer (stateful).

use rand::Rng;
use spaceapps_core::{Rgba, Viewport};

use super::{NebulaSpawn, sample_range, sample_velocity};
use crate::surface::Surface;

/// Opacity of a blob's tint at its centre (`0x33`).
pub const CORE_ALPHA: f32 = 0x33 as f32 / 255.0;

/// A large soft disc drifting at constant velocity.
///
/// Only the position changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NebulaBlob {
    x: f32,
    y: f32,
    radius: f32,
    color: Rgba,
    dx: f32,
    dy: f32,
}

impl NebulaBlob {
    pub fn new(x: f32, y: f32, radius: f32, color: Rgba, dx: f32, dy: f32) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            dx,
            dy,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    /// Move by one frame of velocity. The wrap margin is widened by the
    /// radius so the disc leaves the screen completely before reappearing.
    fn advance(&mut self, viewport: Viewport) {
        self.x = wrap(self.x + self.dx, viewport.w(), self.radius);
        self.y = wrap(self.y + self.dy, viewport.h(), self.radius);
    }
}

fn wrap(value: f32, max: f32, margin: f32) -> f32 {
    let mut value = value;
    if value < -margin {
        value = max + margin;
    }
    if value > max + margin {
        value = -margin;
    }
    value
}

/// Create `count` blobs scattered over the viewport.
pub fn spawn<R: Rng>(
    count: usize,
    viewport: Viewport,
    params: &NebulaSpawn,
    rng: &mut R,
) -> Vec<NebulaBlob> {
    let palette = params.palette();
    (0..count)
        .map(|_| NebulaBlob {
            x: rng.random_range(0.0..viewport.w()),
            y: rng.random_range(0.0..viewport.h()),
            radius: sample_range(rng, params.radius),
            color: palette[rng.random_range(0..palette.len())],
            dx: sample_velocity(rng, params.max_speed),
            dy: sample_velocity(rng, params.max_speed),
        })
        .collect()
}

/// Advance every blob by one frame.
pub fn update(blobs: &mut [NebulaBlob], viewport: Viewport) {
    for blob in blobs {
        blob.advance(viewport);
    }
}

/// Draw every blob as a radial gradient fading from its tint to transparent.
pub fn render<S: Surface + ?Sized>(blobs: &[NebulaBlob], surface: &mut S) {
    for blob in blobs {
        surface.fill_radial_gradient(
            blob.x,
            blob.y,
            blob.radius,
            blob.color.with_alpha(CORE_ALPHA),
            Rgba::TRANSPARENT,
        );
    }
}
