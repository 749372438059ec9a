//! Particle model shared by both scene variants.

use glam::{vec2, Vec2};

use crate::core::rng::Rng;
use crate::render::color::Rgba;
use crate::render::surface::DrawSurface;

/// A single drifting particle.
///
/// Position may leave the viewport transiently (by at most one frame's
/// velocity); the boundary policies below guarantee it never escapes
/// permanently.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Spawn at a uniformly random position with a velocity drawn from a
    /// symmetric range on both axes, so the field has near-zero expected
    /// drift. Used by the bouncing variant.
    pub fn scatter(
        rng: &mut Rng,
        width: f32,
        height: f32,
        max_speed: f32,
        radius: (f32, f32),
        opacity: (f32, f32),
    ) -> Self {
        Self {
            pos: vec2(rng.next_range(0.0, width), rng.next_range(0.0, height)),
            vel: vec2(rng.next_symmetric(max_speed), rng.next_symmetric(max_speed)),
            radius: rng.next_range(radius.0, radius.1),
            opacity: rng.next_range(opacity.0, opacity.1),
        }
    }

    /// Spawn at a uniformly random position with an upward velocity and a
    /// small sideways sway. Used by the rising variant.
    pub fn rising(
        rng: &mut Rng,
        width: f32,
        height: f32,
        rise_speed: (f32, f32),
        sway: f32,
        radius: (f32, f32),
        opacity: (f32, f32),
    ) -> Self {
        Self {
            pos: vec2(rng.next_range(0.0, width), rng.next_range(0.0, height)),
            vel: vec2(
                rng.next_symmetric(sway),
                -rng.next_range(rise_speed.0, rise_speed.1),
            ),
            radius: rng.next_range(radius.0, radius.1),
            opacity: rng.next_range(opacity.0, opacity.1),
        }
    }

    /// Advance one frame, inverting a velocity component whenever the
    /// position has crossed the matching bound (elastic bounce). The
    /// particle is back inside `[0,w] x [0,h]` within one correction.
    pub fn step_bounce(&mut self, width: f32, height: f32) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Advance one frame; once the particle leaves through the top or
    /// either side by more than `margin`, recycle it to a fresh random
    /// horizontal position just below the bottom edge so it re-enters
    /// from below. Returns true when the particle was recycled.
    pub fn step_rise(&mut self, width: f32, height: f32, margin: f32, rng: &mut Rng) -> bool {
        self.pos += self.vel;
        if self.pos.y < -margin || self.pos.x < -margin || self.pos.x > width + margin {
            self.pos = vec2(rng.next_range(0.0, width), height + margin);
            return true;
        }
        false
    }

    /// Render as a filled circle. Pure side effect on the surface.
    pub fn draw(&self, color: Rgba, surface: &mut dyn DrawSurface) {
        surface.fill_circle(self.pos, self.radius, color.with_alpha(color.a * self.opacity));
    }
}
