//! Linked particle field (first revision of the hero background).
//!
//! Slow particles bounce inside the viewport; every pair closer than the
//! link distance is joined by a line whose opacity fades linearly with
//! distance. Draw order: clear, links, particles.

use serde::{Deserialize, Serialize};

use crate::api::scene::{EngineContext, Scene};
use crate::entities::particle::Particle;
use crate::error::EngineError;
use crate::render::color::Rgba;
use crate::render::surface::DrawSurface;
use crate::scenes::{ensure, ensure_range};

/// Tuning constants for the particle field. Validated at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    /// One particle per this many pixels of viewport width.
    pub density_divisor: f32,
    /// Hard cap on the particle count.
    pub max_particles: usize,
    /// Upper bound on the magnitude of each velocity component.
    pub max_speed: f32,
    /// Particle radius range in pixels.
    pub radius: (f32, f32),
    /// Particle opacity range.
    pub opacity: (f32, f32),
    /// Pairs closer than this get a connection line.
    pub link_distance: f32,
    pub link_width: f32,
    pub particle_color: Rgba,
    pub link_color: Rgba,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            density_divisor: 15.0,
            max_particles: 80,
            max_speed: 0.25,
            radius: (1.0, 3.0),
            opacity: (0.6, 1.0),
            link_distance: 150.0,
            link_width: 0.5,
            particle_color: Rgba::opaque(0, 255, 136),
            link_color: Rgba::opaque(0, 255, 136),
        }
    }
}

impl ConstellationConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure(
            self.density_divisor.is_finite() && self.density_divisor > 0.0,
            "density_divisor must be positive",
        )?;
        ensure(self.max_particles >= 1, "max_particles must be at least 1")?;
        ensure(self.max_speed > 0.0, "max_speed must be positive")?;
        ensure_range(self.radius, "radius")?;
        ensure_range(self.opacity, "opacity")?;
        ensure(self.opacity.1 <= 1.0, "opacity must not exceed 1")?;
        ensure(self.link_distance > 0.0, "link_distance must be positive")?;
        ensure(self.link_width > 0.0, "link_width must be positive")?;
        Ok(())
    }
}

/// Variant-1 composer: owns the particle collection and the per-frame draw
/// sequence.
pub struct ConstellationScene {
    config: ConstellationConfig,
    particles: Vec<Particle>,
}

impl ConstellationScene {
    pub fn new(config: ConstellationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            particles: Vec::new(),
        })
    }

    /// Deterministic particle count for a given viewport width.
    pub fn target_count(&self, width: f32) -> usize {
        ((width / self.config.density_divisor) as usize).min(self.config.max_particles)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }

    fn draw_links(&self, surface: &mut dyn DrawSurface) {
        let link = self.config.link_distance;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = a.pos.distance(b.pos);
                if distance < link {
                    let fade = 1.0 - distance / link;
                    let color = self.config.link_color;
                    surface.stroke_line(
                        a.pos,
                        b.pos,
                        self.config.link_width,
                        color.with_alpha(color.a * fade),
                    );
                }
            }
        }
    }
}

impl Scene for ConstellationScene {
    fn seed(&mut self, ctx: &mut EngineContext) {
        let (w, h) = (ctx.viewport.fwidth(), ctx.viewport.fheight());
        let count = self.target_count(w);
        self.particles = (0..count)
            .map(|_| {
                Particle::scatter(
                    &mut ctx.rng,
                    w,
                    h,
                    self.config.max_speed,
                    self.config.radius,
                    self.config.opacity,
                )
            })
            .collect();
        log::debug!("constellation: seeded {} particles for {}x{}", count, w, h);
    }

    fn render(&mut self, ctx: &mut EngineContext, _time: f64, surface: &mut dyn DrawSurface) {
        if ctx.viewport.is_degenerate() {
            return;
        }
        let (w, h) = (ctx.viewport.fwidth(), ctx.viewport.fheight());

        surface.clear(w, h);
        self.draw_links(surface);
        for particle in &mut self.particles {
            particle.step_bounce(w, h);
            particle.draw(self.config.particle_color, surface);
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        let config: ConstellationConfig = serde_json::from_str(json)?;
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    fn seeded_scene(w: u32, h: u32) -> (ConstellationScene, EngineContext) {
        let mut scene = ConstellationScene::new(ConstellationConfig::default()).unwrap();
        let mut ctx = EngineContext::new(42);
        ctx.viewport.resize(w, h);
        scene.seed(&mut ctx);
        (scene, ctx)
    }

    #[test]
    fn seed_count_follows_width_density() {
        let (scene, _) = seeded_scene(800, 600);
        // min(floor(800 / 15), 80) = 53
        assert_eq!(scene.particles().len(), 53);
    }

    #[test]
    fn seed_count_is_capped() {
        let (scene, _) = seeded_scene(3000, 600);
        assert_eq!(scene.particles().len(), 80);
    }

    #[test]
    fn seed_count_is_independent_of_prior_state() {
        let (mut scene, mut ctx) = seeded_scene(800, 600);
        scene.seed(&mut ctx);
        scene.seed(&mut ctx);
        assert_eq!(scene.particles().len(), 53);
    }

    #[test]
    fn seeding_is_deterministic_for_a_fixed_seed() {
        let (a, _) = seeded_scene(800, 600);
        let (b, _) = seeded_scene(800, 600);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }

    #[test]
    fn render_emits_one_clear_and_all_particles() {
        let (mut scene, mut ctx) = seeded_scene(800, 600);
        let mut surface = RecordingSurface::new();
        for t in 1..=100 {
            surface.reset();
            scene.render(&mut ctx, t as f64, &mut surface);
            assert_eq!(surface.clears(), 1);
            assert_eq!(surface.circles(), 53);
            // Link count varies with positions; it is bounded by the pair count.
            assert!(surface.lines() <= 53 * 52 / 2);
        }
    }

    #[test]
    fn degenerate_viewport_renders_nothing() {
        let (mut scene, mut ctx) = seeded_scene(0, 600);
        assert!(scene.particles().is_empty());
        let mut surface = RecordingSurface::new();
        scene.render(&mut ctx, 1.0, &mut surface);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn configure_rejects_bad_values_and_keeps_old_config() {
        let (mut scene, _) = seeded_scene(800, 600);
        let err = scene.configure(r#"{"density_divisor": 0.0}"#);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
        assert_eq!(scene.config().density_divisor, 15.0);

        let err = scene.configure("not json");
        assert!(matches!(err, Err(EngineError::ConfigParse(_))));
    }

    #[test]
    fn configure_accepts_partial_overrides() {
        let (mut scene, _) = seeded_scene(800, 600);
        scene
            .configure(r#"{"density_divisor": 20.0, "max_particles": 50}"#)
            .unwrap();
        assert_eq!(scene.target_count(800.0), 40);
    }

    #[test]
    fn invalid_construction_fails_fast() {
        let config = ConstellationConfig {
            radius: (3.0, 1.0),
            ..ConstellationConfig::default()
        };
        assert!(ConstellationScene::new(config).is_err());
    }
}
