use backdrop_engine::{Driver, EngineError, Scene};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::canvas::CanvasSurface;

/// Generic backdrop runner that wires a scene strategy to a host canvas.
///
/// Each concrete deployment (e.g. `hero-backdrop`) creates a
/// `thread_local!` BackdropRunner and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs
/// directly. The host page drives `tick` from its requestAnimationFrame
/// loop and `resize` from the window resize event; loop teardown on
/// navigation belongs to the host.
pub struct BackdropRunner<S: Scene> {
    driver: Driver<S>,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
}

impl<S: Scene> BackdropRunner<S> {
    /// Locate the canvas, grab its 2D context, and size everything to the
    /// current viewport. Fails fast with `MissingSurface` when the canvas
    /// is absent; the caller logs and never starts the loop.
    pub fn new(scene: S, canvas_id: &str) -> Result<Self, EngineError> {
        let window = web_sys::window()
            .ok_or_else(|| EngineError::MissingSurface("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| EngineError::MissingSurface("no document".to_string()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                EngineError::MissingSurface(format!("no element with id '{}'", canvas_id))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                EngineError::MissingSurface(format!("element '{}' is not a canvas", canvas_id))
            })?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| EngineError::MissingSurface("2d context request failed".to_string()))?
            .ok_or_else(|| EngineError::MissingSurface("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::MissingSurface("2d context has wrong type".to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let mut runner = Self {
            driver: Driver::new(scene, seed),
            canvas,
            surface: CanvasSurface::new(ctx),
        };
        runner.resize();
        Ok(runner)
    }

    /// Match the canvas pixel size to the window's inner size and reseed
    /// the scene. Assigning canvas dimensions clears it per platform
    /// convention, so nothing drawn earlier survives.
    pub fn resize(&mut self) {
        let (width, height) = window_inner_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.driver.resize(width, height);
    }

    /// Run one frame tick.
    pub fn tick(&mut self) {
        self.driver.tick(&mut self.surface);
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn frame(&self) -> f64 {
        self.driver.frame()
    }

    /// Replace the scene configuration from a JSON payload and reseed.
    pub fn load_config(&mut self, json: &str) -> Result<(), EngineError> {
        self.driver.configure(json)
    }
}

/// Current window inner size in pixels, zero when unavailable (the engine
/// treats a zero dimension as a skip-this-frame condition, not an error).
fn window_inner_size() -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (0, 0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width.max(0.0) as u32, height.max(0.0) as u32)
}
