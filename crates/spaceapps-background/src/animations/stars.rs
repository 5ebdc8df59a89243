//! Starfield layer (stateful).

use rand::Rng;
use spaceapps_core::{Rgba, Viewport};

use super::{StarSpawn, sample_range, sample_velocity};
use crate::surface::Surface;

/// A small bright point drifting at constant velocity.
///
/// Only the position changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    x: f32,
    y: f32,
    radius: f32,
    alpha: f32,
    dx: f32,
    dy: f32,
}

impl Star {
    pub fn new(x: f32, y: f32, radius: f32, alpha: f32, dx: f32, dy: f32) -> Self {
        Self {
            x,
            y,
            radius,
            alpha,
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

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    /// Move by one frame of velocity, wrapping to the opposite edge.
    fn advance(&mut self, viewport: Viewport) {
        self.x = wrap(self.x + self.dx, viewport.w());
        self.y = wrap(self.y + self.dy, viewport.h());
    }
}

/// Below zero lands on `max`; beyond `max` lands on zero.
fn wrap(value: f32, max: f32) -> f32 {
    let mut value = value;
    if value < 0.0 {
        value = max;
    }
    if value > max {
        value = 0.0;
    }
    value
}

/// Create `count` stars scattered over the viewport.
pub fn spawn<R: Rng>(
    count: usize,
    viewport: Viewport,
    params: &StarSpawn,
    rng: &mut R,
) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.random_range(0.0..viewport.w()),
            y: rng.random_range(0.0..viewport.h()),
            radius: sample_range(rng, params.radius),
            alpha: rng.random_range(0.0..1.0),
            dx: sample_velocity(rng, params.max_speed),
            dy: sample_velocity(rng, params.max_speed),
        })
        .collect()
}

/// Advance every star by one frame.
pub fn update(stars: &mut [Star], viewport: Viewport) {
    for star in stars {
        star.advance(viewport);
    }
}

/// Draw every star as a translucent white disc.
pub fn render<S: Surface + ?Sized>(stars: &[Star], surface: &mut S) {
    for star in stars {
        surface.fill_circle(
            star.x,
            star.y,
            star.radius,
            Rgba::WHITE.with_alpha(star.alpha),
        );
    }
}
