pub mod canvas;
pub mod runner;

pub use canvas::CanvasSurface;
pub use runner::BackdropRunner;

/// Generate all `#[wasm_bindgen]` exports for a backdrop deployment.
///
/// Generates the `thread_local!` runner storage, a non-panicking
/// `with_runner()` helper, and the init/tick/resize/start/stop/config
/// exports. When initialization fails (missing canvas, bad scene config)
/// the error is logged and every export degrades to a no-op; nothing is
/// thrown into the host page.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use backdrop_engine::AuroraScene;
///
/// mod scene;
/// use scene::hero_scene;
///
/// backdrop_web::export_backdrop!(AuroraScene, hero_scene(), "hero-backdrop");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: the scene strategy type implementing `Scene`
/// - `$scene_ctor`: an expression yielding `Result<$scene_type, EngineError>`
/// - `$name`: a string literal used in log messages
#[macro_export]
macro_rules! export_backdrop {
    ($scene_type:ty, $scene_ctor:expr, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::BackdropRunner<$scene_type>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::BackdropRunner<$scene_type>) -> R,
        ) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        #[wasm_bindgen]
        pub fn backdrop_init(canvas_id: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let scene: $scene_type = match $scene_ctor {
                Ok(scene) => scene,
                Err(e) => {
                    log::error!("{}: scene construction failed: {}", $name, e);
                    return;
                }
            };
            let runner = match $crate::BackdropRunner::new(scene, canvas_id) {
                Ok(runner) => runner,
                Err(e) => {
                    log::error!("{}: {}", $name, e);
                    return;
                }
            };

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.start());
            log::info!("{}: initialized", $name);
        }

        /// One frame; call from the page's requestAnimationFrame loop.
        #[wasm_bindgen]
        pub fn backdrop_tick() {
            with_runner(|r| r.tick());
        }

        /// Re-fit the canvas to the window; call from the resize event.
        #[wasm_bindgen]
        pub fn backdrop_resize() {
            with_runner(|r| r.resize());
        }

        #[wasm_bindgen]
        pub fn backdrop_start() {
            with_runner(|r| r.start());
        }

        #[wasm_bindgen]
        pub fn backdrop_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn backdrop_is_running() -> bool {
            with_runner(|r| r.is_running()).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn backdrop_frame() -> f64 {
            with_runner(|r| r.frame()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn backdrop_load_config(json: &str) {
            if let Some(Err(e)) = with_runner(|r| r.load_config(json)) {
                log::error!("{}: config rejected: {}", $name, e);
            }
        }
    };
}
