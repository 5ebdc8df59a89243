//! Surface double that records draw calls.

use spaceapps_core::Rgba;

use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(f32, f32, f32, f32),
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgba,
    },
    Gradient {
        cx: f32,
        cy: f32,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
    fn clear_region(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear(x, y, width, height));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn fill_radial_gradient(&mut self, cx: f32, cy: f32, radius: f32, inner: Rgba, outer: Rgba) {
        self.calls.push(DrawCall::Gradient {
            cx,
            cy,
            radius,
            inner,
            outer,
        });
    }
}
