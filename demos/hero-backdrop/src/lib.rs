use wasm_bindgen::prelude::*;

use backdrop_engine::AuroraScene;

mod scene;
use scene::hero_scene;

backdrop_web::export_backdrop!(AuroraScene, hero_scene(), "hero-backdrop");
