//! Draw-call recorder for headless testing.

use glam::Vec2;

use super::color::Rgba;
use super::surface::DrawSurface;

/// One recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Polyline { points: Vec<Vec2>, color: Rgba },
    RadialGradient { center: Vec2, radius: f32 },
}

/// A `DrawSurface` that records every call instead of rasterizing.
///
/// Lets tests drive composers and the driver for a bounded number of ticks
/// and assert on the exact draw sequence (one clear + N draws per frame).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn clears(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Clear { .. }))
    }

    pub fn circles(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn lines(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn polylines(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Polyline { .. }))
    }

    pub fn gradients(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::RadialGradient { .. }))
    }

    fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], _width: f32, color: Rgba) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        _inner: Rgba,
        _outer: Rgba,
        _width: f32,
        _height: f32,
    ) {
        self.ops.push(DrawOp::RadialGradient { center, radius });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.clear(10.0, 10.0);
        surface.fill_circle(vec2(1.0, 2.0), 3.0, Rgba::opaque(255, 0, 0));
        assert_eq!(surface.ops.len(), 2);
        assert!(matches!(surface.ops[0], DrawOp::Clear { .. }));
        assert!(matches!(surface.ops[1], DrawOp::Circle { .. }));
        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.circles(), 1);
    }
}
