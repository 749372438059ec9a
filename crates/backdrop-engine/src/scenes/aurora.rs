//! Layered wave / particle / grid / glow scene (second revision of the
//! hero background).
//!
//! Layering is a contract, back to front: grid, waves, particles, glows.
//! Reordering changes visible output but not motion.

use glam::vec2;
use serde::{Deserialize, Serialize};

use crate::api::scene::{EngineContext, Scene};
use crate::entities::glow::Glow;
use crate::entities::particle::Particle;
use crate::entities::wave::Wave;
use crate::error::EngineError;
use crate::render::color::Rgba;
use crate::render::surface::DrawSurface;
use crate::scenes::{ensure, ensure_range};

/// Parameters for one wave layer. The vertical offset is a fraction of the
/// viewport height so the layer survives resizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub offset: f32,
    pub stroke_width: f32,
    pub color: Rgba,
}

/// Parameters for one glow overlay, all as viewport fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlowConfig {
    pub anchor: [f32; 2],
    pub radius: f32,
    pub drift: [f32; 2],
    pub rate: [f32; 2],
    pub color: Rgba,
}

/// Tuning constants for the layered scene. Validated at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuroraConfig {
    /// One particle per this many pixels of viewport width.
    pub density_divisor: f32,
    pub max_particles: usize,
    /// Recycle band outside the viewport, in pixels.
    pub margin: f32,
    /// Upward speed range (positive values; applied upward).
    pub rise_speed: (f32, f32),
    /// Upper bound on sideways velocity magnitude.
    pub sway: f32,
    pub radius: (f32, f32),
    pub opacity: (f32, f32),
    pub particle_color: Rgba,
    pub grid_spacing: f32,
    pub grid_color: Rgba,
    pub waves: Vec<WaveConfig>,
    pub glows: Vec<GlowConfig>,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        let accent = Rgba::opaque(0, 255, 136);
        Self {
            density_divisor: 20.0,
            max_particles: 60,
            margin: 10.0,
            rise_speed: (0.2, 0.7),
            sway: 0.3,
            radius: (1.0, 2.5),
            opacity: (0.2, 0.8),
            particle_color: accent,
            grid_spacing: 64.0,
            grid_color: Rgba::new(255, 255, 255, 0.04),
            waves: vec![
                WaveConfig {
                    amplitude: 26.0,
                    frequency: 0.012,
                    speed: 0.020,
                    offset: 0.55,
                    stroke_width: 2.0,
                    color: accent.with_alpha(0.25),
                },
                WaveConfig {
                    amplitude: 20.0,
                    frequency: 0.016,
                    speed: 0.026,
                    offset: 0.62,
                    stroke_width: 1.5,
                    color: Rgba::new(0, 200, 255, 0.18),
                },
                WaveConfig {
                    amplitude: 14.0,
                    frequency: 0.021,
                    speed: 0.033,
                    offset: 0.70,
                    stroke_width: 1.0,
                    color: Rgba::new(160, 120, 255, 0.14),
                },
            ],
            glows: vec![
                GlowConfig {
                    anchor: [0.25, 0.35],
                    radius: 0.55,
                    drift: [0.08, 0.04],
                    rate: [0.0021, 0.0017],
                    color: accent.with_alpha(0.10),
                },
                GlowConfig {
                    anchor: [0.75, 0.55],
                    radius: 0.45,
                    drift: [0.06, 0.05],
                    rate: [0.0013, 0.0024],
                    color: Rgba::new(0, 160, 255, 0.08),
                },
            ],
        }
    }
}

impl AuroraConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure(
            self.density_divisor.is_finite() && self.density_divisor > 0.0,
            "density_divisor must be positive",
        )?;
        ensure(self.max_particles >= 1, "max_particles must be at least 1")?;
        ensure(self.margin >= 0.0, "margin must not be negative")?;
        ensure_range(self.rise_speed, "rise_speed")?;
        ensure(self.sway >= 0.0, "sway must not be negative")?;
        ensure_range(self.radius, "radius")?;
        ensure_range(self.opacity, "opacity")?;
        ensure(self.opacity.1 <= 1.0, "opacity must not exceed 1")?;
        ensure(self.grid_spacing > 0.0, "grid_spacing must be positive")?;
        ensure(!self.waves.is_empty(), "at least one wave layer required")?;
        for wave in &self.waves {
            ensure(wave.amplitude > 0.0, "wave amplitude must be positive")?;
            ensure(wave.frequency > 0.0, "wave frequency must be positive")?;
            ensure(wave.stroke_width > 0.0, "wave stroke_width must be positive")?;
        }
        for glow in &self.glows {
            ensure(glow.radius > 0.0, "glow radius must be positive")?;
        }
        Ok(())
    }
}

/// Variant-2 composer: owns particles, waves and glows, regenerating all
/// of them on every seed.
pub struct AuroraScene {
    config: AuroraConfig,
    particles: Vec<Particle>,
    waves: Vec<Wave>,
    glows: Vec<Glow>,
}

impl AuroraScene {
    pub fn new(config: AuroraConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            particles: Vec::new(),
            waves: Vec::new(),
            glows: Vec::new(),
        })
    }

    /// Deterministic particle count for a given viewport width.
    pub fn target_count(&self, width: f32) -> usize {
        ((width / self.config.density_divisor) as usize).min(self.config.max_particles)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn config(&self) -> &AuroraConfig {
        &self.config
    }

    /// Number of grid lines drawn for the given extents, matching
    /// `draw_grid` exactly.
    pub fn grid_line_count(&self, width: f32, height: f32) -> usize {
        let spacing = self.config.grid_spacing;
        let verticals = ((width / spacing).ceil() as usize).saturating_sub(1);
        let horizontals = ((height / spacing).ceil() as usize).saturating_sub(1);
        verticals + horizontals
    }

    fn draw_grid(&self, width: f32, height: f32, surface: &mut dyn DrawSurface) {
        let spacing = self.config.grid_spacing;
        let color = self.config.grid_color;

        let mut x = spacing;
        while x < width {
            surface.stroke_line(vec2(x, 0.0), vec2(x, height), 1.0, color);
            x += spacing;
        }
        let mut y = spacing;
        while y < height {
            surface.stroke_line(vec2(0.0, y), vec2(width, y), 1.0, color);
            y += spacing;
        }
    }
}

impl Scene for AuroraScene {
    fn seed(&mut self, ctx: &mut EngineContext) {
        let (w, h) = (ctx.viewport.fwidth(), ctx.viewport.fheight());

        let count = self.target_count(w);
        self.particles = (0..count)
            .map(|_| {
                Particle::rising(
                    &mut ctx.rng,
                    w,
                    h,
                    self.config.rise_speed,
                    self.config.sway,
                    self.config.radius,
                    self.config.opacity,
                )
            })
            .collect();

        self.waves = self
            .config
            .waves
            .iter()
            .map(|c| Wave {
                amplitude: c.amplitude,
                frequency: c.frequency,
                speed: c.speed,
                offset_y: c.offset * h,
                stroke_width: c.stroke_width,
                color: c.color,
            })
            .collect();

        self.glows = self
            .config
            .glows
            .iter()
            .map(|c| Glow {
                anchor: vec2(c.anchor[0], c.anchor[1]),
                radius: c.radius,
                drift: vec2(c.drift[0], c.drift[1]),
                rate: vec2(c.rate[0], c.rate[1]),
                color: c.color,
            })
            .collect();

        log::debug!(
            "aurora: seeded {} particles, {} waves, {} glows for {}x{}",
            count,
            self.waves.len(),
            self.glows.len(),
            w,
            h
        );
    }

    fn render(&mut self, ctx: &mut EngineContext, time: f64, surface: &mut dyn DrawSurface) {
        if ctx.viewport.is_degenerate() {
            return;
        }
        let (w, h) = (ctx.viewport.fwidth(), ctx.viewport.fheight());
        let margin = self.config.margin;

        surface.clear(w, h);
        self.draw_grid(w, h, surface);
        for wave in &self.waves {
            wave.draw(w, time, surface);
        }
        for particle in &mut self.particles {
            particle.step_rise(w, h, margin, &mut ctx.rng);
            particle.draw(self.config.particle_color, surface);
        }
        for glow in &self.glows {
            glow.draw(w, h, time, surface);
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        let config: AuroraConfig = serde_json::from_str(json)?;
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
