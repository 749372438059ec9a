//! Canvas 2D implementation of the engine's drawing surface.

use backdrop_engine::{DrawSurface, Rgba};
use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

/// Draws engine primitives through a `CanvasRenderingContext2d`.
///
/// Canvas calls that can only fail on non-finite input are ignored on
/// error; the composers never produce non-finite coordinates.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for point in iter {
            self.ctx.line_to(point.x as f64, point.y as f64);
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
        width: f32,
        height: f32,
    ) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius as f64)
        else {
            return;
        };
        if gradient.add_color_stop(0.0, &inner.css()).is_err() {
            return;
        }
        if gradient.add_color_stop(1.0, &outer.css()).is_err() {
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }
}
