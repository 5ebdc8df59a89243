//! Character constants for background rendering.

/// Star glyphs, smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '•', '+', '*', '✦'];

/// Pick a star glyph for a disc of `radius` pixels drawn into cells no
/// larger than `max_radius`.
pub fn star_glyph(radius: f32, max_radius: f32) -> char {
    if max_radius <= 0.0 {
        return STAR_CHARS[0];
    }
    let ratio = (radius / max_radius).clamp(0.0, 1.0);
    let idx = (ratio * STAR_CHARS.len() as f32) as usize;
    STAR_CHARS[idx.min(STAR_CHARS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_glyph_grows_with_radius() {
        assert_eq!(star_glyph(0.0, 4.0), '·');
        assert_eq!(star_glyph(4.0, 4.0), '✦');
        assert_eq!(star_glyph(100.0, 4.0), '✦');
        assert_eq!(star_glyph(1.0, 0.0), '·');
    }
}
