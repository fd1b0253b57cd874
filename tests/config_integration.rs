//! Configuration loading and startup validation.

use std::fs;

use siopao::components::tags::Platform;
use siopao::error::ConfigError;
use siopao::game::init_world;
use siopao::resources::fixedtimestep::FixedTimestep;
use siopao::resources::gameconfig::GameConfig;
use siopao::resources::level::LevelLayout;

#[test]
fn ini_and_layout_files_drive_the_world() {
    let dir = tempfile::tempdir().unwrap();
    let layout_path = dir.path().join("level.json");
    fs::write(
        &layout_path,
        r#"{ "platforms": [
            { "x": 0.0, "y": 600.0, "width": 200.0, "height": 20.0 },
            { "x": 400.0, "y": 500.0, "width": 100.0, "height": 20.0 }
        ] }"#,
    )
    .unwrap();

    let ini_path = dir.path().join("config.ini");
    fs::write(
        &ini_path,
        format!(
            "[physics]\ntick_rate = 30\ngravity = 250\n\n[level]\nlayout = {}\n",
            layout_path.display()
        ),
    )
    .unwrap();

    let mut config = GameConfig::with_path(&ini_path);
    config.load_from_file().unwrap();
    assert_eq!(config.physics.gravity, 250.0);
    assert_eq!(config.layout.len(), 2);

    let mut world = init_world(config).unwrap();
    let step = world.resource::<FixedTimestep>().step();
    assert!((step - 1.0 / 30.0).abs() < 1e-6);

    let mut q = world.query::<&Platform>();
    let mut indices: Vec<usize> = q.iter(&world).map(|p| p.index).collect();
    indices.sort();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn saved_config_loads_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");

    let mut config = GameConfig::with_path(&path);
    config.physics.side_bounce = 7.5;
    config.sling_max_hold = 8;
    config.save_to_file().unwrap();

    let mut loaded = GameConfig::with_path(&path);
    loaded.load_from_file().unwrap();
    assert_eq!(loaded.physics, config.physics);
    assert_eq!(loaded.sling_max_hold, 8);
}

#[test]
fn invalid_configurations_are_rejected_before_the_loop() {
    let mut config = GameConfig::new();
    config.physics.tick_rate = 0.0;
    assert!(matches!(
        init_world(config),
        Err(ConfigError::InvalidTickRate(_))
    ));

    let config = GameConfig::new().with_layout(LevelLayout { platforms: vec![] });
    assert!(matches!(init_world(config), Err(ConfigError::EmptyLayout)));
}

#[test]
fn missing_layout_file_is_an_error() {
    let mut config = GameConfig::new();
    let result = config.load_from_str("[level]\nlayout = /nonexistent/level.json\n");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
