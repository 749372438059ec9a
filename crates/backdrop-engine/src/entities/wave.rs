//! Procedural waveform entity (layered-scene variant).

use glam::{vec2, Vec2};

use crate::render::color::Rgba;
use crate::render::surface::DrawSurface;

/// One undulating line. All fields are fixed at creation; only the
/// externally advanced time value moves the rendered shape.
#[derive(Debug, Clone)]
pub struct Wave {
    pub amplitude: f32,
    /// Spatial frequency in radians per pixel column.
    pub frequency: f32,
    /// Temporal speed in radians per tick.
    pub speed: f32,
    /// Vertical centerline in pixels.
    pub offset_y: f32,
    pub stroke_width: f32,
    pub color: Rgba,
}

impl Wave {
    /// Vertical displacement at column `x`: two superposed sines, the
    /// second at half the spatial frequency, 70% of the temporal speed and
    /// half the amplitude, so the line never looks perfectly periodic.
    /// Phase math stays in f64 until the final pixel coordinate.
    pub fn sample(&self, x: f32, time: f64) -> f32 {
        let x = x as f64;
        let freq = self.frequency as f64;
        let speed = self.speed as f64;
        let amp = self.amplitude as f64;

        let primary = (x * freq + time * speed).sin() * amp;
        let secondary = (x * freq * 0.5 + time * speed * 0.7).sin() * amp * 0.5;
        (self.offset_y as f64 + primary + secondary) as f32
    }

    /// Stroke one continuous path sampling every pixel column in
    /// `[0, width)`. Pure rendering; no wave state mutates.
    pub fn draw(&self, width: f32, time: f64, surface: &mut dyn DrawSurface) {
        let columns = width as u32;
        let mut points: Vec<Vec2> = Vec::with_capacity(columns as usize);
        for x in 0..columns {
            let x = x as f32;
            points.push(vec2(x, self.sample(x, time)));
        }
        surface.stroke_polyline(&points, self.stroke_width, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawOp, RecordingSurface};

    fn test_wave() -> Wave {
        Wave {
            amplitude: 20.0,
            frequency: 0.02,
            speed: 0.03,
            offset_y: 300.0,
            stroke_width: 2.0,
            color: Rgba::new(0, 255, 136, 0.4),
        }
    }

    #[test]
    fn samples_are_continuous_across_columns() {
        let wave = test_wave();
        // Slope is bounded by A*f + (A/2)*(f/2) = 1.25*A*f = 0.5 px/column.
        for &t in &[0.0, 1.0, 513.0, 1.0e6] {
            for x in 0..799 {
                let a = wave.sample(x as f32, t);
                let b = wave.sample((x + 1) as f32, t);
                assert!((a - b).abs() < 0.6, "discontinuity at x={} t={}", x, t);
            }
        }
    }

    #[test]
    fn samples_stay_within_amplitude_envelope() {
        let wave = test_wave();
        for x in 0..800 {
            let y = wave.sample(x as f32, 17.0);
            assert!((y - 300.0).abs() <= 30.0 + 1.0e-3, "outside envelope: {}", y);
            assert!(y.is_finite());
        }
    }

    #[test]
    fn draw_emits_one_path_per_call() {
        let wave = test_wave();
        let mut surface = RecordingSurface::new();
        wave.draw(800.0, 42.0, &mut surface);
        assert_eq!(surface.polylines(), 1);
        match &surface.ops[0] {
            DrawOp::Polyline { points, .. } => assert_eq!(points.len(), 800),
            op => panic!("unexpected op: {:?}", op),
        }
    }

    #[test]
    fn time_moves_the_shape() {
        let wave = test_wave();
        let a = wave.sample(100.0, 0.0);
        let b = wave.sample(100.0, 25.0);
        assert_ne!(a, b);
    }
}
