//! Straight-alpha RGBA color.

use ratatui::style::Color;

/// An 8-bit RGB color with a straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::new(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f32 / 255.0,
            )),
            _ => None,
        }
    }

    /// Same channels, different alpha (clamped to `0.0..=1.0`).
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Interpolate towards `other` in premultiplied space, `t` in `0.0..=1.0`.
    ///
    /// Fading a color into [`Rgba::TRANSPARENT`] keeps its hue and only
    /// lowers alpha, the way 2D canvas gradients behave.
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.a + (other.a - self.a) * t;
        if a <= f32::EPSILON {
            return Self::TRANSPARENT;
        }

        let channel = |c0: u8, c1: u8| {
            let premul = c0 as f32 * self.a * (1.0 - t) + c1 as f32 * other.a * t;
            (premul / a).round().clamp(0.0, 255.0) as u8
        };

        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            a,
        )
    }

    /// Composite this color over an opaque backdrop given as float channels.
    pub fn over(self, dst: [f32; 3]) -> [f32; 3] {
        let a = self.a.clamp(0.0, 1.0);
        [
            self.r as f32 * a + dst[0] * (1.0 - a),
            self.g as f32 * a + dst[1] * (1.0 - a),
            self.b as f32 * a + dst[2] * (1.0 - a),
        ]
    }

    /// Float channels of this color, ignoring alpha.
    pub fn channels(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Convert float channels back into a terminal color.
    pub fn terminal_color(channels: [f32; 3]) -> Color {
        let [r, g, b] = channels.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Color::Rgb(r, g, b)
    }
}
