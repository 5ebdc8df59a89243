//! Background layers and the random spawn parameters they share.

pub mod nebula;
pub mod stars;
pub mod twinkle;

use rand::Rng;
use spaceapps_core::Rgba;

/// Colors the nebula blobs are tinted with.
pub const DEFAULT_PALETTE: [Rgba; 5] = [
    Rgba::rgb(0x7f, 0x00, 0xff),
    Rgba::rgb(0xff, 0x00, 0xff),
    Rgba::rgb(0x00, 0xff, 0xff),
    Rgba::rgb(0xff, 0x45, 0x00),
    Rgba::rgb(0x1e, 0x90, 0xff),
];

/// Spawn parameters for the starfield layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSpawn {
    /// Radius range `[min, max)` in pixels.
    pub radius: (f32, f32),
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
}

impl Default for StarSpawn {
    fn default() -> Self {
        Self {
            radius: (0.0, 1.5),
            max_speed: 0.025,
        }
    }
}

/// Spawn parameters for the nebula layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NebulaSpawn {
    /// Radius range `[min, max)` in pixels.
    pub radius: (f32, f32),
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
    /// Blob tints; an empty palette falls back to [`DEFAULT_PALETTE`].
    pub palette: Vec<Rgba>,
}

impl Default for NebulaSpawn {
    fn default() -> Self {
        Self {
            radius: (100.0, 300.0),
            max_speed: 0.01,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl NebulaSpawn {
    /// The palette blobs are drawn from, never empty.
    pub fn palette(&self) -> &[Rgba] {
        if self.palette.is_empty() {
            &DEFAULT_PALETTE
        } else {
            &self.palette
        }
    }
}

/// Everything needed to populate a background.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    pub star_count: usize,
    pub blob_count: usize,
    /// Twinkling points shown behind the FAQ.
    pub twinkle_count: usize,
    pub stars: StarSpawn,
    pub nebula: NebulaSpawn,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            star_count: 300,
            blob_count: 40,
            twinkle_count: 150,
            stars: StarSpawn::default(),
            nebula: NebulaSpawn::default(),
        }
    }
}

/// Uniform sample from `[min, max)`.
///
/// A degenerate range yields `min`. Ranges with a non-finite bound or span
/// yield `min` when it is finite and `0.0` otherwise, so the result is
/// always finite.
pub(crate) fn sample_range<R: Rng>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    if min.is_finite() && max.is_finite() && (max - min).is_finite() && max > min {
        rng.random_range(min..max)
    } else if min.is_finite() {
        min
    } else {
        0.0
    }
}

/// Uniform velocity component in `[-max_speed, max_speed)`.
///
/// A speed whose symmetric range cannot be represented gives a still element.
pub(crate) fn sample_velocity<R: Rng>(rng: &mut R, max_speed: f32) -> f32 {
    let max_speed = max_speed.abs();
    if !(max_speed * 2.0).is_finite() {
        return 0.0;
    }
    sample_range(rng, (-max_speed, max_speed))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_degenerate_range_yields_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_range(&mut rng, (2.0, 2.0)), 2.0);
        assert_eq!(sample_range(&mut rng, (5.0, 1.0)), 5.0);
        assert_eq!(sample_velocity(&mut rng, 0.0), 0.0);
    }

    #[test]
    fn test_unrepresentable_ranges_stay_finite() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(sample_velocity(&mut rng, f32::INFINITY), 0.0);
        assert_eq!(sample_velocity(&mut rng, f32::NAN), 0.0);
        assert_eq!(sample_velocity(&mut rng, 2e38), 0.0);
        assert_eq!(sample_velocity(&mut rng, f32::MAX), 0.0);

        assert_eq!(sample_range(&mut rng, (0.0, f32::INFINITY)), 0.0);
        assert_eq!(sample_range(&mut rng, (f32::NEG_INFINITY, 1.0)), 0.0);
        assert_eq!(sample_range(&mut rng, (f32::NAN, 1.0)), 0.0);
        assert_eq!(sample_range(&mut rng, (1.0, f32::NAN)), 1.0);
        assert!(sample_range(&mut rng, (-f32::MAX, f32::MAX)).is_finite());
    }

    #[test]
    fn test_nan_speed_keeps_stars_wrapping() {
        let mut rng = StdRng::seed_from_u64(1);
        let viewport = spaceapps_core::Viewport::new(800, 600).unwrap();
        let params = StarSpawn {
            radius: (f32::NAN, f32::INFINITY),
            max_speed: f32::NAN,
        };
        let mut field = stars::spawn(10, viewport, &params, &mut rng);

        for _ in 0..10 {
            stars::update(&mut field, viewport);
        }
        for star in &field {
            let (x, y) = star.position();
            assert!((0.0..=800.0).contains(&x));
            assert!((0.0..=600.0).contains(&y));
            assert_eq!(star.velocity(), (0.0, 0.0));
            assert_eq!(star.radius(), 0.0);
        }
    }

    #[test]
    fn test_velocity_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = sample_velocity(&mut rng, -0.5);
            assert!((-0.5..0.5).contains(&v));
        }
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let spawn = NebulaSpawn {
            palette: Vec::new(),
            ..NebulaSpawn::default()
        };
        assert_eq!(spawn.palette(), &DEFAULT_PALETTE);
    }
}
