//! Drawing-surface abstraction.
//!
//! The engine's only output boundary is a 2D drawable surface with a
//! handful of primitive operations. `backdrop-web` implements this over
//! `CanvasRenderingContext2d`; tests implement it with a draw-call
//! recorder. Implementations draw in pixel coordinates with the origin at
//! the top-left corner.

use glam::Vec2;

use super::color::Rgba;

/// Primitive drawing operations the composers render through.
///
/// All operations are pure side effects on the surface; none return state.
/// A surface never owns the viewport dimensions — composers pass the
/// extents they were seeded with.
pub trait DrawSurface {
    /// Clear the rectangle from the origin to (width, height).
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle at `center` with the given radius.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight segment between two points.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Stroke one continuous path through `points` in order.
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);

    /// Composite a radial gradient over the whole (width × height) surface:
    /// `inner` at `center` fading to `outer` at `radius`.
    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
        width: f32,
        height: f32,
    );
}
