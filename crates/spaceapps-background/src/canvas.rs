//! Terminal-cell rasterizer for the drawing primitives.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use spaceapps_core::{Rgba, Viewport};

use crate::chars::star_glyph;
use crate::surface::Surface;

/// One terminal cell worth of paint.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CanvasCell {
    bg: [f32; 3],
    glyph: Option<char>,
    fg: [f32; 3],
}

impl CanvasCell {
    fn blank(background: [f32; 3]) -> Self {
        Self {
            bg: background,
            glyph: None,
            fg: background,
        }
    }

    /// Composite a translucent color over everything already painted here.
    fn paint(&mut self, color: Rgba) {
        self.bg = color.over(self.bg);
        if self.glyph.is_some() {
            self.fg = color.over(self.fg);
        }
    }
}

/// A grid of terminal cells addressed in virtual pixels.
///
/// Every cell spans `cell_width × cell_height` pixels. Discs too small to
/// cover a cell become a star glyph in the cell holding their centre; larger
/// discs paint every cell whose centre they cover.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    cell_width: u16,
    cell_height: u16,
    background: [f32; 3],
    cells: Vec<CanvasCell>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, cell_width: u16, cell_height: u16) -> Self {
        let background = Rgba::BLACK.channels();
        Self {
            cols,
            rows,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            background,
            cells: vec![CanvasCell::blank(background); cols as usize * rows as usize],
        }
    }

    /// Match a new terminal size. Contents are discarded.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) == (self.cols, self.rows) {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![CanvasCell::blank(self.background); cols as usize * rows as usize];
    }

    /// Pixel extent of the grid, `None` while it has no cells.
    pub fn viewport(&self) -> Option<Viewport> {
        Viewport::from_cells(self.cols, self.rows, self.cell_width, self.cell_height)
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Glyph drawn at a cell, if any.
    pub fn glyph_at(&self, col: u16, row: u16) -> Option<char> {
        self.cell(col, row).and_then(|cell| cell.glyph)
    }

    /// Background color of a cell.
    pub fn background_at(&self, col: u16, row: u16) -> Option<Color> {
        self.cell(col, row).map(|cell| Rgba::terminal_color(cell.bg))
    }

    fn cell(&self, col: u16, row: u16) -> Option<&CanvasCell> {
        self.index(col, row).map(|idx| &self.cells[idx])
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows)
            .then(|| row as usize * self.cols as usize + col as usize)
    }

    /// Cell containing a pixel.
    fn locate(&self, x: f32, y: f32) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_width as f32) as u32;
        let row = (y / self.cell_height as f32) as u32;
        if col >= self.cols as u32 || row >= self.rows as u32 {
            return None;
        }
        self.index(col as u16, row as u16)
    }

    /// Cells whose centre lies strictly inside the disc, with the centre's
    /// distance from the disc centre.
    fn covered(&self, cx: f32, cy: f32, radius: f32) -> Vec<(usize, f32)> {
        let cw = self.cell_width as f32;
        let ch = self.cell_height as f32;
        let col_span = cell_span(cx, radius, cw, self.cols);
        let row_span = cell_span(cy, radius, ch, self.rows);

        let mut covered = Vec::new();
        for row in row_span.clone() {
            let py = (row as f32 + 0.5) * ch;
            for col in col_span.clone() {
                let px = (col as f32 + 0.5) * cw;
                let dist = (px - cx).hypot(py - cy);
                if dist < radius
                    && let Some(idx) = self.index(col, row)
                {
                    covered.push((idx, dist));
                }
            }
        }
        covered
    }

    /// Radius below which a disc is drawn as a glyph.
    fn glyph_radius(&self) -> f32 {
        self.cell_width.min(self.cell_height) as f32 / 2.0
    }
}

/// Range of cell indices along one axis that a disc may touch.
fn cell_span(center: f32, radius: f32, cell_size: f32, count: u16) -> std::ops::Range<u16> {
    let first = ((center - radius) / cell_size).floor().max(0.0);
    let last = ((center + radius) / cell_size).ceil().min(count as f32);
    if last <= first {
        return 0..0;
    }
    first as u16..last as u16
}

impl Surface for CellCanvas {
    fn clear_region(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let cw = self.cell_width as f32;
        let ch = self.cell_height as f32;
        let blank = CanvasCell::blank(self.background);

        for row in 0..self.rows {
            let py = (row as f32 + 0.5) * ch;
            if py < y || py >= y + height {
                continue;
            }
            for col in 0..self.cols {
                let px = (col as f32 + 0.5) * cw;
                if px >= x
                    && px < x + width
                    && let Some(idx) = self.index(col, row)
                {
                    self.cells[idx] = blank;
                }
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let glyph_radius = self.glyph_radius();
        if radius < glyph_radius {
            if let Some(idx) = self.locate(cx, cy) {
                let cell = &mut self.cells[idx];
                cell.glyph = Some(star_glyph(radius, glyph_radius));
                cell.fg = color.over(cell.bg);
            }
            return;
        }

        for (idx, _) in self.covered(cx, cy, radius) {
            self.cells[idx].paint(color);
        }
    }

    fn fill_radial_gradient(&mut self, cx: f32, cy: f32, radius: f32, inner: Rgba, outer: Rgba) {
        if radius <= 0.0 {
            return;
        }
        for (idx, dist) in self.covered(cx, cy, radius) {
            self.cells[idx].paint(inner.mix(outer, dist / radius));
        }
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows.min(area.height);
        let cols = self.cols.min(area.width);

        for row in 0..rows {
            for col in 0..cols {
                let Some(painted) = self.cell(col, row) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(painted.glyph.unwrap_or(' '))
                        .set_fg(Rgba::terminal_color(painted.fg))
                        .set_bg(Rgba::terminal_color(painted.bg));
                }
            }
        }
    }
}
