//! Mount lifecycle of the background animation.

use std::time::{Duration, Instant};

use rand::Rng;
use spaceapps_core::{AnimationSpeed, BackgroundLayers, Viewport};
use tracing::{debug, warn};

use crate::animations::AnimatorConfig;
use crate::schedule::{CancellationToken, FrameScheduler};
use crate::state::BackgroundAnimator;
use crate::surface::Surface;

/// An animator together with its frame chain.
#[derive(Debug)]
struct Mounted {
    animator: BackgroundAnimator,
    scheduler: FrameScheduler,
}

/// Owns the background for as long as it is mounted.
///
/// While unmounted no state exists and [`Backdrop::tick`] does nothing.
#[derive(Debug)]
pub struct Backdrop {
    config: AnimatorConfig,
    speed: AnimationSpeed,
    layers: BackgroundLayers,
    /// Draw the twinkling field over the drifting layers.
    twinkle: bool,
    mounted: Option<Mounted>,
}

impl Backdrop {
    pub fn new(config: AnimatorConfig, speed: AnimationSpeed, layers: BackgroundLayers) -> Self {
        Self {
            config,
            speed,
            layers,
            twinkle: false,
            mounted: None,
        }
    }

    /// Populate the layers and request the first frame.
    ///
    /// An unavailable surface (`None`) leaves the backdrop idle without
    /// error. Mounting an already mounted backdrop replaces it.
    pub fn mount<R: Rng>(
        &mut self,
        viewport: Option<Viewport>,
        rng: &mut R,
        now: Instant,
    ) -> bool {
        self.unmount();

        let Some(viewport) = viewport else {
            warn!("drawing surface unavailable, background disabled");
            return false;
        };

        let animator = BackgroundAnimator::new(viewport, &self.config, rng);
        let mut scheduler =
            FrameScheduler::new(self.speed.frame_interval(), CancellationToken::new());
        scheduler.request_immediate(now);

        debug!(
            width = viewport.width(),
            height = viewport.height(),
            stars = animator.stars().len(),
            blobs = animator.nebula().len(),
            "background mounted"
        );
        self.mounted = Some(Mounted {
            animator,
            scheduler,
        });
        true
    }

    /// Stop the frame chain and hand back the final state.
    pub fn unmount(&mut self) -> Option<BackgroundAnimator> {
        let mut mounted = self.mounted.take()?;
        mounted.scheduler.cancel();
        debug!(frames = mounted.animator.frame_count(), "background unmounted");
        Some(mounted.animator)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Run one frame step if one is due, then request the next.
    ///
    /// Returns whether the surface was repainted.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        if !mounted.scheduler.poll(now) {
            return false;
        }

        mounted.animator.step();
        mounted.animator.render(surface, self.layers);
        if self.twinkle && self.layers.draws_stars() {
            mounted.animator.render_twinkle(surface);
        }
        mounted.animator.advance_twinkle(self.speed.frame_interval());
        mounted.scheduler.request_frame(now);
        true
    }

    /// Forward a viewport change. An unavailable viewport is ignored.
    pub fn resize(&mut self, viewport: Option<Viewport>) {
        if let (Some(mounted), Some(viewport)) = (self.mounted.as_mut(), viewport) {
            debug!(
                width = viewport.width(),
                height = viewport.height(),
                "background resized"
            );
            mounted.animator.resize(viewport);
        }
    }

    /// How long the host loop may block before the next frame is due.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.mounted
            .as_ref()
            .and_then(|mounted| mounted.scheduler.timeout(now))
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    /// Change frame cadence, effective from the next request.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.scheduler.set_interval(speed.frame_interval());
        }
    }

    pub fn layers(&self) -> BackgroundLayers {
        self.layers
    }

    pub fn set_layers(&mut self, layers: BackgroundLayers) {
        self.layers = layers;
    }

    pub fn twinkle(&self) -> bool {
        self.twinkle
    }

    /// Show or hide the twinkling field from the next frame on. Its pulses
    /// keep running while hidden.
    pub fn set_twinkle(&mut self, twinkle: bool) {
        self.twinkle = twinkle;
    }

    pub fn animator(&self) -> Option<&BackgroundAnimator> {
        self.mounted.as_ref().map(|mounted| &mounted.animator)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::testing::RecordingSurface;

    fn viewport() -> Option<Viewport> {
        Viewport::new(800, 600)
    }

    fn backdrop() -> Backdrop {
        Backdrop::new(
            AnimatorConfig::default(),
            AnimationSpeed::Medium,
            BackgroundLayers::Full,
        )
    }

    #[test]
    fn test_unavailable_surface_stays_idle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut backdrop = backdrop();
        let now = Instant::now();

        assert!(!backdrop.mount(None, &mut rng, now));
        assert!(!backdrop.is_mounted());
        assert_eq!(backdrop.timeout(now), None);

        let mut surface = RecordingSurface::default();
        assert!(!backdrop.tick(&mut surface, now));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_first_frame_is_immediate_then_paced() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut backdrop = backdrop();
        let mut surface = RecordingSurface::default();
        let now = Instant::now();
        let interval = AnimationSpeed::Medium.frame_interval();

        assert!(backdrop.mount(viewport(), &mut rng, now));
        assert!(backdrop.tick(&mut surface, now));
        assert_eq!(surface.calls.len(), 1 + 300 + 40);

        // Exactly one successor is pending.
        assert_eq!(backdrop.timeout(now), Some(interval));
        assert!(!backdrop.tick(&mut surface, now));
        assert!(backdrop.tick(&mut surface, now + interval));
        assert_eq!(backdrop.animator().unwrap().frame_count(), 2);
    }

    #[test]
    fn test_unmount_freezes_positions() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut backdrop = backdrop();
        let mut surface = RecordingSurface::default();
        let start = Instant::now();
        let interval = AnimationSpeed::Medium.frame_interval();

        backdrop.mount(viewport(), &mut rng, start);
        for i in 0..10 {
            assert!(backdrop.tick(&mut surface, start + interval * i));
        }

        let frozen = backdrop.unmount().unwrap();
        assert_eq!(frozen.frame_count(), 10);
        assert!(!backdrop.is_mounted());

        let calls = surface.calls.len();
        for i in 10..20 {
            assert!(!backdrop.tick(&mut surface, start + interval * i));
        }
        assert_eq!(surface.calls.len(), calls);
        assert!(backdrop.unmount().is_none());
    }

    #[test]
    fn test_resize_forwards_to_animator() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut backdrop = backdrop();
        backdrop.mount(viewport(), &mut rng, Instant::now());
        let before: Vec<_> = backdrop
            .animator()
            .unwrap()
            .stars()
            .iter()
            .map(|s| s.position())
            .collect();

        backdrop.resize(Viewport::new(1024, 768));
        backdrop.resize(None);

        let animator = backdrop.animator().unwrap();
        assert_eq!(animator.viewport(), Viewport::new(1024, 768).unwrap());
        let after: Vec<_> = animator.stars().iter().map(|s| s.position()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remount_reseeds() {
        let mut backdrop = backdrop();
        let now = Instant::now();

        backdrop.mount(viewport(), &mut StdRng::seed_from_u64(1), now);
        let first = backdrop.animator().unwrap().stars()[0].clone();
        backdrop.mount(viewport(), &mut StdRng::seed_from_u64(2), now);
        let second = backdrop.animator().unwrap().stars()[0].clone();

        assert_ne!(first, second);
        assert_eq!(backdrop.animator().unwrap().frame_count(), 0);
    }

    #[test]
    fn test_speed_change_applies_to_next_request() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut backdrop = backdrop();
        let mut surface = RecordingSurface::default();
        let now = Instant::now();

        backdrop.mount(viewport(), &mut rng, now);
        backdrop.set_speed(AnimationSpeed::Fast);
        assert!(backdrop.tick(&mut surface, now));
        assert_eq!(
            backdrop.timeout(now),
            Some(AnimationSpeed::Fast.frame_interval())
        );
    }

    #[test]
    fn test_twinkle_drawn_only_when_enabled_with_stars() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut backdrop = backdrop();
        let now = Instant::now();
        let interval = AnimationSpeed::Medium.frame_interval();
        backdrop.mount(viewport(), &mut rng, now);

        backdrop.set_twinkle(true);
        let mut surface = RecordingSurface::default();
        assert!(backdrop.tick(&mut surface, now));
        assert_eq!(surface.calls.len(), 1 + 300 + 40 + 150);

        backdrop.set_layers(BackgroundLayers::Nebula);
        let mut surface = RecordingSurface::default();
        assert!(backdrop.tick(&mut surface, now + interval));
        assert_eq!(surface.calls.len(), 1 + 40);

        backdrop.set_twinkle(false);
        backdrop.set_layers(BackgroundLayers::Full);
        let mut surface = RecordingSurface::default();
        assert!(backdrop.tick(&mut surface, now + interval * 2));
        assert_eq!(surface.calls.len(), 1 + 300 + 40);

        assert_eq!(backdrop.animator().unwrap().twinkle_clock(), interval * 3);
    }
}
