use backdrop_engine::{AuroraConfig, AuroraScene, EngineError, Rgba};

const ACCENT: Rgba = Rgba::opaque(0, 255, 136);

/// Scene tuning for the portfolio hero section.
pub fn hero_scene() -> Result<AuroraScene, EngineError> {
    let config = AuroraConfig {
        density_divisor: 18.0,
        max_particles: 70,
        particle_color: ACCENT,
        ..AuroraConfig::default()
    };
    AuroraScene::new(config)
}
