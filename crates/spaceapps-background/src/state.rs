//! Background animation state.

use std::time::Duration;

use rand::Rng;
use spaceapps_core::{BackgroundLayers, Viewport};

use crate::animations::{
    AnimatorConfig,
    nebula::{self, NebulaBlob},
    stars::{self, Star},
    twinkle::{self, TwinkleStar},
};
use crate::surface::Surface;

/// Starfield and nebula layers over one viewport, plus the twinkling field
/// some pages draw on top.
///
/// Element counts are fixed at creation. A frame step moves every element by
/// its own velocity; rendering never mutates.
#[derive(Debug, Clone)]
pub struct BackgroundAnimator {
    /// Starfield layer.
    stars: Vec<Star>,
    /// Nebula layer.
    nebula: Vec<NebulaBlob>,
    /// Stationary pulsing points.
    twinkle: Vec<TwinkleStar>,
    /// Time the twinkle pulses have run for.
    twinkle_clock: Duration,
    /// Bounds used for wraparound.
    viewport: Viewport,
    /// Number of frame steps taken.
    frames: u64,
}

impl BackgroundAnimator {
    /// Populate both layers from `rng`.
    pub fn new<R: Rng>(viewport: Viewport, config: &AnimatorConfig, rng: &mut R) -> Self {
        let stars = stars::spawn(config.star_count, viewport, &config.stars, rng);
        let nebula = nebula::spawn(config.blob_count, viewport, &config.nebula, rng);
        let twinkle = twinkle::spawn(config.twinkle_count, rng);
        Self::from_parts(viewport, stars, nebula).with_twinkle(twinkle)
    }

    /// Build from explicit elements.
    pub fn from_parts(viewport: Viewport, stars: Vec<Star>, nebula: Vec<NebulaBlob>) -> Self {
        Self {
            stars,
            nebula,
            twinkle: Vec::new(),
            twinkle_clock: Duration::ZERO,
            viewport,
            frames: 0,
        }
    }

    /// Replace the twinkling field.
    pub fn with_twinkle(mut self, twinkle: Vec<TwinkleStar>) -> Self {
        self.twinkle = twinkle;
        self
    }

    /// Advance both layers by one frame.
    pub fn step(&mut self) {
        stars::update(&mut self.stars, self.viewport);
        nebula::update(&mut self.nebula, self.viewport);
        self.frames += 1;
    }

    /// Clear the surface and draw the selected layers, stars first.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, layers: BackgroundLayers) {
        surface.clear_region(0.0, 0.0, self.viewport.w(), self.viewport.h());

        if layers.draws_stars() {
            stars::render(&self.stars, surface);
        }
        if layers.draws_nebula() {
            nebula::render(&self.nebula, surface);
        }
    }

    /// Run the twinkle pulses forward by `elapsed`.
    pub fn advance_twinkle(&mut self, elapsed: Duration) {
        self.twinkle_clock += elapsed;
    }

    /// Draw the twinkling field over whatever is already on the surface.
    pub fn render_twinkle<S: Surface + ?Sized>(&self, surface: &mut S) {
        twinkle::render(
            &self.twinkle,
            self.viewport,
            self.twinkle_clock.as_secs_f32(),
            surface,
        );
    }

    /// Adopt new wraparound bounds. Existing positions are kept as they are,
    /// even when they now lie outside the viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nebula(&self) -> &[NebulaBlob] {
        &self.nebula
    }

    pub fn twinkle(&self) -> &[TwinkleStar] {
        &self.twinkle
    }

    pub fn twinkle_clock(&self) -> Duration {
        self.twinkle_clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::animations::DEFAULT_PALETTE;
    use crate::testing::{DrawCall, RecordingSurface};

    fn viewport() -> Viewport {
        Viewport::new(800, 600).unwrap()
    }

    fn seeded(seed: u64) -> BackgroundAnimator {
        let mut rng = StdRng::seed_from_u64(seed);
        BackgroundAnimator::new(viewport(), &AnimatorConfig::default(), &mut rng)
    }

    fn positions(animator: &BackgroundAnimator) -> Vec<(f32, f32)> {
        animator
            .stars()
            .iter()
            .map(Star::position)
            .chain(animator.nebula().iter().map(NebulaBlob::position))
            .collect()
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = seeded(2025);
        let mut b = seeded(2025);
        assert_eq!(positions(&a), positions(&b));

        for _ in 0..200 {
            a.step();
            b.step();
            assert_eq!(positions(&a), positions(&b));
        }
        assert_ne!(positions(&a), positions(&seeded(2026)));
    }

    #[test]
    fn test_only_positions_change() {
        let mut animator = seeded(9);
        let stars_before = animator.stars().to_vec();
        let nebula_before = animator.nebula().to_vec();

        for _ in 0..1000 {
            animator.step();
        }

        assert_eq!(animator.stars().len(), 300);
        assert_eq!(animator.nebula().len(), 40);
        assert_eq!(animator.twinkle().len(), 150);
        assert_eq!(animator.frame_count(), 1000);

        for (before, after) in stars_before.iter().zip(animator.stars()) {
            assert_eq!(before.radius(), after.radius());
            assert_eq!(before.alpha(), after.alpha());
            assert_eq!(before.velocity(), after.velocity());
        }
        for (before, after) in nebula_before.iter().zip(animator.nebula()) {
            assert_eq!(before.radius(), after.radius());
            assert_eq!(before.color(), after.color());
            assert_eq!(before.velocity(), after.velocity());
        }
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut animator = BackgroundAnimator::from_parts(
            viewport(),
            vec![Star::new(700.0, 500.0, 1.0, 1.0, 0.0, 0.0)],
            vec![NebulaBlob::new(
                750.0,
                550.0,
                100.0,
                DEFAULT_PALETTE[2],
                0.0,
                0.0,
            )],
        );

        let smaller = Viewport::new(400, 300).unwrap();
        animator.resize(smaller);
        assert_eq!(animator.viewport(), smaller);
        assert_eq!(animator.stars()[0].position(), (700.0, 500.0));
        assert_eq!(animator.nebula()[0].position(), (750.0, 550.0));

        // The star is now past the edge and wraps on its next step.
        animator.step();
        assert_eq!(animator.stars()[0].position(), (0.0, 0.0));
        // The blob sits beyond the widened margin on both axes.
        assert_eq!(animator.nebula()[0].position(), (-100.0, -100.0));
    }

    #[test]
    fn test_render_order_and_layers() {
        let animator = BackgroundAnimator::from_parts(
            viewport(),
            vec![Star::new(10.0, 20.0, 1.0, 0.5, 0.0, 0.0)],
            vec![NebulaBlob::new(
                100.0,
                200.0,
                150.0,
                DEFAULT_PALETTE[0],
                0.0,
                0.0,
            )],
        );

        let mut surface = RecordingSurface::default();
        animator.render(&mut surface, BackgroundLayers::Full);
        assert_eq!(surface.calls.len(), 3);
        assert_eq!(surface.calls[0], DrawCall::Clear(0.0, 0.0, 800.0, 600.0));
        assert!(matches!(surface.calls[1], DrawCall::Circle { radius, .. } if radius == 1.0));
        assert!(matches!(surface.calls[2], DrawCall::Gradient { radius, .. } if radius == 150.0));

        let mut surface = RecordingSurface::default();
        animator.render(&mut surface, BackgroundLayers::Nebula);
        assert_eq!(surface.calls.len(), 2);
        assert!(matches!(surface.calls[1], DrawCall::Gradient { .. }));

        let mut surface = RecordingSurface::default();
        animator.render(&mut surface, BackgroundLayers::Off);
        assert_eq!(surface.calls, vec![DrawCall::Clear(0.0, 0.0, 800.0, 600.0)]);
    }

    #[test]
    fn test_twinkle_follows_clock_not_steps() {
        let star = TwinkleStar::new(0.5, 0.5, 1.0, 0.0, 0.0, 2.0);
        let mut animator = BackgroundAnimator::from_parts(viewport(), Vec::new(), Vec::new())
            .with_twinkle(vec![star]);

        let alpha = |animator: &BackgroundAnimator| {
            let mut surface = RecordingSurface::default();
            animator.render_twinkle(&mut surface);
            match surface.calls.as_slice() {
                [DrawCall::Circle { cx, cy, color, .. }] => {
                    assert_eq!((*cx, *cy), (400.0, 300.0));
                    color.a
                }
                calls => panic!("unexpected draw calls: {calls:?}"),
            }
        };

        animator.step();
        assert_eq!(alpha(&animator), 1.0);

        animator.advance_twinkle(Duration::from_secs(1));
        assert_eq!(animator.twinkle_clock(), Duration::from_secs(1));
        assert!((alpha(&animator) - 0.5).abs() < 1e-5);

        animator.resize(Viewport::new(400, 200).unwrap());
        let mut surface = RecordingSurface::default();
        animator.render_twinkle(&mut surface);
        assert!(matches!(
            surface.calls[0],
            DrawCall::Circle { cx, cy, .. } if (cx, cy) == (200.0, 100.0)
        ));
    }
}
