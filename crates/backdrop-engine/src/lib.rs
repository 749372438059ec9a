pub mod api;
pub mod core;
pub mod entities;
pub mod error;
pub mod render;
pub mod scenes;

// Re-export key types at crate root for convenience
pub use api::scene::{EngineContext, Scene};
pub use core::clock::FrameClock;
pub use core::driver::{Driver, DriverState};
pub use core::rng::Rng;
pub use core::viewport::Viewport;
pub use entities::glow::Glow;
pub use entities::particle::Particle;
pub use entities::wave::Wave;
pub use error::EngineError;
pub use render::color::Rgba;
pub use render::recording::{DrawOp, RecordingSurface};
pub use render::surface::DrawSurface;
pub use scenes::aurora::{AuroraConfig, AuroraScene, GlowConfig, WaveConfig};
pub use scenes::constellation::{ConstellationConfig, ConstellationScene};
