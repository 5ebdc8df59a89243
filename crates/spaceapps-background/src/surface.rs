//! The drawing primitives the background needs from its host.

use spaceapps_core::Rgba;

/// A 2D drawing surface in virtual-pixel coordinates.
pub trait Surface {
    /// Reset the rectangle starting at `(x, y)` to the surface background.
    fn clear_region(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a disc with a flat color.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba);

    /// Fill a disc with a radial gradient going from `inner` at the centre to
    /// `outer` at `radius`.
    fn fill_radial_gradient(&mut self, cx: f32, cy: f32, radius: f32, inner: Rgba, outer: Rgba);
}
