//! User-selectable background settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Frame cadence of the background animation.
///
/// Speed only changes how often a frame step runs; element velocities are
/// per-frame and never rescaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Time between two frame steps.
    pub fn frame_interval(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(50),
            AnimationSpeed::Medium => Duration::from_millis(33),
            AnimationSpeed::Fast => Duration::from_millis(16),
        }
    }

    /// Short name shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Which background layers get drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundLayers {
    #[default]
    Full,
    Stars,
    Nebula,
    Off,
}

impl BackgroundLayers {
    /// Cycle to the next layer selection.
    pub fn next(self) -> Self {
        match self {
            BackgroundLayers::Full => BackgroundLayers::Stars,
            BackgroundLayers::Stars => BackgroundLayers::Nebula,
            BackgroundLayers::Nebula => BackgroundLayers::Off,
            BackgroundLayers::Off => BackgroundLayers::Full,
        }
    }

    pub fn draws_stars(self) -> bool {
        matches!(self, BackgroundLayers::Full | BackgroundLayers::Stars)
    }

    pub fn draws_nebula(self) -> bool {
        matches!(self, BackgroundLayers::Full | BackgroundLayers::Nebula)
    }

    /// Short name shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            BackgroundLayers::Full => "full",
            BackgroundLayers::Stars => "stars",
            BackgroundLayers::Nebula => "nebula",
            BackgroundLayers::Off => "off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle_returns_to_start() {
        let start = AnimationSpeed::default();
        assert_eq!(start.next().next().next(), start);
        assert!(AnimationSpeed::Fast.frame_interval() < AnimationSpeed::Slow.frame_interval());
    }

    #[test]
    fn test_layer_flags() {
        assert!(BackgroundLayers::Full.draws_stars());
        assert!(BackgroundLayers::Full.draws_nebula());
        assert!(!BackgroundLayers::Stars.draws_nebula());
        assert!(!BackgroundLayers::Nebula.draws_stars());
        assert!(!BackgroundLayers::Off.draws_stars() && !BackgroundLayers::Off.draws_nebula());
        assert_eq!(BackgroundLayers::Off.next(), BackgroundLayers::Full);
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            speed: AnimationSpeed,
            layers: BackgroundLayers,
        }

        let parsed: Wrapper = toml::from_str("speed = \"fast\"\nlayers = \"nebula\"").unwrap();
        assert_eq!(parsed.speed, AnimationSpeed::Fast);
        assert_eq!(parsed.layers, BackgroundLayers::Nebula);
    }
}
