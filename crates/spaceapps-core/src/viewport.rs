//! Drawing surface dimensions.

/// Size of a drawing surface in its own units (virtual pixels).
///
/// Both dimensions are always positive; a zero-sized surface is represented
/// by the absence of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Returns `None` when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    /// Viewport covering a terminal area of `cols × rows` cells, each cell
    /// `cell_width × cell_height` virtual pixels.
    pub fn from_cells(cols: u16, rows: u16, cell_width: u16, cell_height: u16) -> Option<Self> {
        Self::new(
            cols as u32 * cell_width as u32,
            rows as u32 * cell_height as u32,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width as a float, for position arithmetic.
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    /// Height as a float, for position arithmetic.
    pub fn h(&self) -> f32 {
        self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_viewport_is_unavailable() {
        assert!(Viewport::new(0, 600).is_none());
        assert!(Viewport::new(800, 0).is_none());
        assert!(Viewport::from_cells(80, 24, 0, 16).is_none());
    }

    #[test]
    fn test_from_cells() {
        let viewport = Viewport::from_cells(100, 40, 8, 16).unwrap();
        assert_eq!(viewport.width(), 800);
        assert_eq!(viewport.height(), 640);
        assert_eq!(viewport.w(), 800.0);
    }
}
