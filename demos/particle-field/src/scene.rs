use backdrop_engine::{ConstellationConfig, ConstellationScene, EngineError};

/// The first-revision hero field: defaults match the original site tuning
/// (one particle per 15 px of width, capped at 80, 150 px links).
pub fn field_scene() -> Result<ConstellationScene, EngineError> {
    ConstellationScene::new(ConstellationConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_scene_config_is_valid() {
        let scene = field_scene().unwrap();
        assert_eq!(scene.target_count(800.0), 53);
    }
}
