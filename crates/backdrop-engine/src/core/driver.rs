//! The animation driver: a start/stop state machine around the frame loop.
//!
//! The host's frame scheduler (requestAnimationFrame in the browser, a
//! plain loop in tests) calls `tick` once per display frame; the driver
//! advances the clock by one logical unit and renders exactly one frame.
//! Inter-tick wall-clock gaps are deliberately ignored.

use crate::api::scene::{EngineContext, Scene};
use crate::core::clock::FrameClock;
use crate::core::viewport::Viewport;
use crate::error::EngineError;
use crate::render::surface::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Owns a scene strategy plus the engine context and clock, and advances
/// them one frame per `tick`. `&mut self` on `tick` guarantees at most one
/// in-flight frame; the driver never terminates on its own.
pub struct Driver<S: Scene> {
    scene: S,
    ctx: EngineContext,
    clock: FrameClock,
    state: DriverState,
}

impl<S: Scene> Driver<S> {
    /// Create a stopped driver with an empty viewport. Call `resize` with
    /// real dimensions before starting.
    pub fn new(scene: S, seed: u64) -> Self {
        Self {
            scene,
            ctx: EngineContext::new(seed),
            clock: FrameClock::new(),
            state: DriverState::Stopped,
        }
    }

    /// Adopt new surface dimensions and fully regenerate the scene's
    /// entities before the next render. Safe to call between any two
    /// frames; the loop keeps running across resizes.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.viewport.resize(width, height);
        self.scene.seed(&mut self.ctx);
        log::debug!("driver: resized to {}x{}", width, height);
    }

    pub fn start(&mut self) {
        self.state = DriverState::Running;
        log::debug!("driver: running");
    }

    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
        log::debug!("driver: stopped");
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Run one frame: advance the clock by one unit and render. A no-op
    /// while stopped.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) {
        if self.state != DriverState::Running {
            return;
        }
        let time = self.clock.advance();
        self.scene.render(&mut self.ctx, time, surface);
    }

    /// Ticks since start.
    pub fn frame(&self) -> f64 {
        self.clock.now()
    }

    pub fn viewport(&self) -> Viewport {
        self.ctx.viewport
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Replace the scene configuration and re-seed for the current
    /// viewport. The old configuration stays in effect on error.
    pub fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        self.scene.configure(json)?;
        self.scene.seed(&mut self.ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    /// Minimal scene that counts calls, for exercising the state machine.
    struct CountingScene {
        seeds: usize,
        renders: usize,
        last_time: f64,
    }

    impl CountingScene {
        fn new() -> Self {
            Self {
                seeds: 0,
                renders: 0,
                last_time: 0.0,
            }
        }
    }

    impl Scene for CountingScene {
        fn seed(&mut self, _ctx: &mut EngineContext) {
            self.seeds += 1;
        }

        fn render(&mut self, ctx: &mut EngineContext, time: f64, surface: &mut dyn DrawSurface) {
            if ctx.viewport.is_degenerate() {
                return;
            }
            self.renders += 1;
            self.last_time = time;
            surface.clear(ctx.viewport.fwidth(), ctx.viewport.fheight());
        }

        fn configure(&mut self, _json: &str) -> Result<(), EngineError> {
            Ok(())
        }
    }

    #[test]
    fn tick_is_a_noop_while_stopped() {
        let mut driver = Driver::new(CountingScene::new(), 1);
        driver.resize(800, 600);
        let mut surface = RecordingSurface::new();
        driver.tick(&mut surface);
        assert_eq!(driver.frame(), 0.0);
        assert_eq!(driver.scene().renders, 0);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn start_tick_stop_lifecycle() {
        let mut driver = Driver::new(CountingScene::new(), 1);
        driver.resize(800, 600);
        assert_eq!(driver.state(), DriverState::Stopped);

        driver.start();
        assert!(driver.is_running());
        let mut surface = RecordingSurface::new();
        for _ in 0..5 {
            driver.tick(&mut surface);
        }
        assert_eq!(driver.frame(), 5.0);
        assert_eq!(driver.scene().renders, 5);
        assert_eq!(driver.scene().last_time, 5.0);

        driver.stop();
        driver.tick(&mut surface);
        assert_eq!(driver.frame(), 5.0, "clock frozen while stopped");
    }

    #[test]
    fn resize_reseeds_without_stopping() {
        let mut driver = Driver::new(CountingScene::new(), 1);
        driver.resize(800, 600);
        driver.start();
        let mut surface = RecordingSurface::new();
        driver.tick(&mut surface);

        driver.resize(1024, 768);
        assert_eq!(driver.scene().seeds, 2);
        assert!(driver.is_running());
        driver.tick(&mut surface);
        assert_eq!(driver.scene().renders, 2);
    }

    #[test]
    fn degenerate_viewport_renders_nothing() {
        let mut driver = Driver::new(CountingScene::new(), 1);
        driver.resize(0, 600);
        driver.start();
        let mut surface = RecordingSurface::new();
        driver.tick(&mut surface);
        assert_eq!(driver.scene().renders, 0);
        assert!(surface.ops.is_empty());

        // Dimensions recover; rendering resumes.
        driver.resize(800, 600);
        driver.tick(&mut surface);
        assert_eq!(driver.scene().renders, 1);
    }
}
