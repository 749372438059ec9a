//! Translucent radial glow overlay (layered-scene variant).

use glam::{vec2, Vec2};

use crate::render::color::Rgba;
use crate::render::surface::DrawSurface;

/// A soft radial gradient composited over the whole scene, drifting along
/// a slow independent sinusoidal path. Parameters are fractions of the
/// viewport so the overlay survives resizes unchanged.
#[derive(Debug, Clone)]
pub struct Glow {
    /// Rest position as fractions of the viewport.
    pub anchor: Vec2,
    /// Gradient radius as a fraction of the smaller viewport dimension.
    pub radius: f32,
    /// Path amplitude on each axis, as fractions of the viewport.
    pub drift: Vec2,
    /// Path angular rate on each axis, radians per tick.
    pub rate: Vec2,
    pub color: Rgba,
}

impl Glow {
    /// Center in pixels at the given time.
    pub fn center(&self, width: f32, height: f32, time: f64) -> Vec2 {
        let dx = (time * self.rate.x as f64).sin() as f32 * self.drift.x;
        let dy = (time * self.rate.y as f64).cos() as f32 * self.drift.y;
        vec2((self.anchor.x + dx) * width, (self.anchor.y + dy) * height)
    }

    pub fn draw(&self, width: f32, height: f32, time: f64, surface: &mut dyn DrawSurface) {
        let center = self.center(width, height, time);
        let radius = self.radius * width.min(height);
        surface.fill_radial_gradient(
            center,
            radius,
            self.color,
            self.color.transparent(),
            width,
            height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    fn test_glow() -> Glow {
        Glow {
            anchor: vec2(0.3, 0.4),
            radius: 0.5,
            drift: vec2(0.1, 0.05),
            rate: vec2(0.002, 0.003),
            color: Rgba::new(0, 255, 136, 0.12),
        }
    }

    #[test]
    fn center_rests_at_anchor_at_time_zero_x() {
        let glow = test_glow();
        let c = glow.center(800.0, 600.0, 0.0);
        // sin(0)=0 on x; cos(0)=1 pushes y to anchor + drift.
        assert_eq!(c.x, 0.3 * 800.0);
        assert_eq!(c.y, (0.4 + 0.05) * 600.0);
    }

    #[test]
    fn center_stays_within_drift_envelope() {
        let glow = test_glow();
        for t in 0..5000 {
            let c = glow.center(800.0, 600.0, t as f64);
            assert!(c.x >= 0.2 * 800.0 - 1.0e-3 && c.x <= 0.4 * 800.0 + 1.0e-3);
            assert!(c.y >= 0.35 * 600.0 - 1.0e-3 && c.y <= 0.45 * 600.0 + 1.0e-3);
        }
    }

    #[test]
    fn draw_emits_one_gradient() {
        let glow = test_glow();
        let mut surface = RecordingSurface::new();
        glow.draw(800.0, 600.0, 10.0, &mut surface);
        assert_eq!(surface.gradients(), 1);
    }
}
