use wasm_bindgen::prelude::*;

use backdrop_engine::ConstellationScene;

mod scene;
use scene::field_scene;

backdrop_web::export_backdrop!(ConstellationScene, field_scene(), "particle-field");
