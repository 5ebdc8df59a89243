//! Twinkling starfield shown behind the FAQ.
//!
//! Unlike the drifting layers these points never move. Positions are kept as
//! fractions of the viewport so the field follows a resize, and each point
//! pulses between half and full brightness on its own period after its own
//! delay.

use std::f32::consts::TAU;

use rand::Rng;
use spaceapps_core::{Rgba, Viewport};

use crate::surface::Surface;

/// Brightness at the bottom of a pulse, relative to the peak.
pub const MIN_PULSE: f32 = 0.5;

const RADIUS: (f32, f32) = (0.25, 1.25);
const BLUR: (f32, f32) = (0.0, 1.5);
const DELAY_SECS: (f32, f32) = (0.0, 3.0);
const PERIOD_SECS: (f32, f32) = (2.0, 5.0);

/// A fixed point with its own pulse timing.
#[derive(Debug, Clone, PartialEq)]
pub struct TwinkleStar {
    /// Horizontal position as a fraction of the viewport width.
    u: f32,
    /// Vertical position as a fraction of the viewport height.
    v: f32,
    radius: f32,
    blur: f32,
    delay: f32,
    period: f32,
}

impl TwinkleStar {
    pub fn new(u: f32, v: f32, radius: f32, blur: f32, delay: f32, period: f32) -> Self {
        Self {
            u,
            v,
            radius,
            blur,
            delay,
            period,
        }
    }

    /// Pixel position inside `viewport`.
    pub fn position(&self, viewport: Viewport) -> (f32, f32) {
        (self.u * viewport.w(), self.v * viewport.h())
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Opacity `secs` seconds after mount, in `[0, 1]`.
    ///
    /// The point holds its peak until its delay has passed. Blur spreads the
    /// light, so blurrier points peak dimmer.
    pub fn alpha_at(&self, secs: f32) -> f32 {
        let pulse = if secs <= self.delay || self.period <= 0.0 {
            1.0
        } else {
            let phase = ((secs - self.delay) / self.period).fract();
            MIN_PULSE + (1.0 - MIN_PULSE) * 0.5 * (1.0 + (TAU * phase).cos())
        };
        (pulse / (1.0 + self.blur.max(0.0))).clamp(0.0, 1.0)
    }
}

/// Create `count` points scattered over the whole viewport.
pub fn spawn<R: Rng>(count: usize, rng: &mut R) -> Vec<TwinkleStar> {
    (0..count)
        .map(|_| TwinkleStar {
            u: rng.random_range(0.0..1.0),
            v: rng.random_range(0.0..1.0),
            radius: rng.random_range(RADIUS.0..RADIUS.1),
            blur: rng.random_range(BLUR.0..BLUR.1),
            delay: rng.random_range(DELAY_SECS.0..DELAY_SECS.1),
            period: rng.random_range(PERIOD_SECS.0..PERIOD_SECS.1),
        })
        .collect()
}

/// Draw every point at its brightness `secs` seconds after mount.
pub fn render<S: Surface + ?Sized>(
    stars: &[TwinkleStar],
    viewport: Viewport,
    secs: f32,
    surface: &mut S,
) {
    for star in stars {
        let (x, y) = star.position(viewport);
        surface.fill_circle(x, y, star.radius, Rgba::WHITE.with_alpha(star.alpha_at(secs)));
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};

    #[test]
    fn test_alpha_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let stars = spawn(150, &mut rng);

        for step in 0..600 {
            let secs = step as f32 * 0.033;
            for star in &stars {
                let alpha = star.alpha_at(secs);
                assert!((0.0..=1.0).contains(&alpha), "alpha out of bounds: {alpha}");
            }
        }
    }

    #[test]
    fn test_pulse_shape() {
        let star = TwinkleStar::new(0.5, 0.5, 1.0, 0.0, 1.0, 2.0);
        assert_eq!(star.alpha_at(0.0), 1.0);
        assert_eq!(star.alpha_at(1.0), 1.0);
        assert!((star.alpha_at(2.0) - MIN_PULSE).abs() < 1e-5);
        assert!((star.alpha_at(3.0) - 1.0).abs() < 1e-5);

        let blurred = TwinkleStar::new(0.5, 0.5, 1.0, 1.0, 0.0, 2.0);
        assert!((blurred.alpha_at(0.0) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = spawn(150, &mut StdRng::seed_from_u64(4));
        let b = spawn(150, &mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
        assert_ne!(a, spawn(150, &mut StdRng::seed_from_u64(5)));

        for star in &a {
            assert!((DELAY_SECS.0..DELAY_SECS.1).contains(&star.delay()));
            assert!((PERIOD_SECS.0..PERIOD_SECS.1).contains(&star.period()));
            assert!((RADIUS.0..RADIUS.1).contains(&star.radius()));
        }
    }

    #[test]
    fn test_positions_follow_viewport() {
        let star = TwinkleStar::new(0.25, 0.5, 1.0, 0.0, 0.0, 2.0);
        let small = Viewport::new(400, 200).unwrap();
        let large = Viewport::new(800, 600).unwrap();
        assert_eq!(star.position(small), (100.0, 100.0));
        assert_eq!(star.position(large), (200.0, 300.0));

        let mut surface = RecordingSurface::default();
        render(&[star], large, 0.0, &mut surface);
        assert_eq!(
            surface.calls,
            vec![DrawCall::Circle {
                cx: 200.0,
                cy: 300.0,
                radius: 1.0,
                color: Rgba::WHITE.with_alpha(1.0),
            }]
        );
    }
}
