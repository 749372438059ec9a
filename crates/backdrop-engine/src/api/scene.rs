use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::error::EngineError;
use crate::render::surface::DrawSurface;

/// Mutable engine state shared with the scene: the viewport dimensions and
/// the injected random source. Owning both here keeps the engine free of
/// ambient globals and instantiable many times.
pub struct EngineContext {
    pub viewport: Viewport,
    pub rng: Rng,
}

impl EngineContext {
    pub fn new(seed: u64) -> Self {
        Self {
            viewport: Viewport::default(),
            rng: Rng::new(seed),
        }
    }
}

/// The contract every scene strategy fulfills.
///
/// A scene owns its entity collection and the per-frame draw ordering; the
/// driver owns the clock and calls `render` once per tick.
pub trait Scene {
    /// Rebuild the entity collection for the current viewport. Called once
    /// at startup and again after every resize; the collection is fully
    /// replaced, never patched in place. The resulting entity count is
    /// deterministic for fixed dimensions; positions are randomized.
    fn seed(&mut self, ctx: &mut EngineContext);

    /// Draw one complete frame at the given logical time. Must return
    /// without drawing when the viewport is degenerate.
    fn render(&mut self, ctx: &mut EngineContext, time: f64, surface: &mut dyn DrawSurface);

    /// Replace the scene configuration from a JSON payload. The payload is
    /// validated before it is adopted; on error the current configuration
    /// stays in effect.
    fn configure(&mut self, json: &str) -> Result<(), EngineError>;
}
