use std::fs;

use sled_rush::config::GameConfig;

#[test]
fn defaults_match_the_demo_constants() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.trees.count, 150);
    assert!((cfg.trees.span - 50.0).abs() < 1e-6);
    assert!((cfg.trees.min_depth - 5.0).abs() < 1e-6);
    assert!((cfg.trees.max_depth - 500.0).abs() < 1e-6);
    assert_eq!(cfg.sled.half_extents, [0.5, 0.25, 1.5]);
    assert!((cfg.sled.mass - 5.0).abs() < 1e-6);
    assert!((cfg.sled.steer_speed - 5.0).abs() < 1e-6);
    assert_eq!(cfg.camera.offset, [0.0, 3.0, -5.0]);
    assert!((cfg.gravity.y + 9.82).abs() < 1e-6);
    assert!((cfg.slope.tilt + std::f32::consts::PI / 2.2).abs() < 1e-6);
    assert_eq!(cfg.keys.left, "KeyQ");
    assert_eq!(cfg.keys.right, "KeyD");
}

#[test]
fn shipped_config_parses_and_matches_defaults() {
    // The checked-in config is the defaults written out; drift between the
    // two is almost always an editing mistake.
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let raw = fs::read_to_string(path).expect("assets/config/game.ron present");
    let cfg: GameConfig = ron::from_str(&raw).expect("shipped config parses");
    let d = GameConfig::default();
    assert_eq!(cfg.window, d.window);
    assert_eq!(cfg.gravity, d.gravity);
    assert_eq!(cfg.surfaces, d.surfaces);
    assert_eq!(cfg.sled, d.sled);
    assert_eq!(cfg.trees, d.trees);
    assert_eq!(cfg.camera, d.camera);
    assert_eq!(cfg.keys, d.keys);
    // The tilt is written out as a decimal literal; compare with a tolerance.
    assert!((cfg.slope.tilt - d.slope.tilt).abs() < 1e-5);
    assert!(cfg.validate().is_empty());
}

#[test]
fn partial_config_overrides_one_section_only() {
    let mut path = std::env::temp_dir();
    path.push("sled_rush_partial_config.ron");
    let ron = r#"(
        trees: (count: 3, seed: Some(9)),
    )"#;
    fs::write(&path, ron).expect("write temp ron");
    let cfg = GameConfig::load_from_file(&path).expect("parse");
    assert_eq!(cfg.trees.count, 3);
    assert_eq!(cfg.trees.seed, Some(9));
    // Untouched sections keep their defaults.
    assert_eq!(cfg.window, GameConfig::default().window);
    assert_eq!(cfg.sled, GameConfig::default().sled);
    let _ = fs::remove_file(&path);
}
