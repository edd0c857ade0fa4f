//! Loading scene configs from disk.

use std::fs;

use surface_mesh::{ConfigError, RenderMode, SceneConfig, ShapeConfig, SphereDescriptor, TorusDescriptor};
use tempfile::tempdir;

const SCENE: &str = r#"
[[shapes]]
kind = "sphere"
radius = 1.0
slices = 3
stacks = 3

[[shapes]]
kind = "torus"
inner_radius = 0.5
outer_radius = 0.25
nsides = 4
rings = 4
render_mode = "textured"
"#;

#[test]
fn test_load_scene_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.toml");
    fs::write(&path, SCENE).unwrap();

    let config = SceneConfig::load(&path).unwrap();
    assert_eq!(config.shapes.len(), 2);

    let generators = config.build_generators().unwrap();
    assert_eq!(generators[0].mesh().vertex_count(), 16);
    assert_eq!(generators[0].mesh().index_count(), 54);
    assert_eq!(generators[1].mesh().vertex_count(), 25);
    assert_eq!(generators[1].mesh().index_count(), 96);
    assert_eq!(generators[1].render_mode(), RenderMode::Textured);
}

#[test]
fn test_saved_scene_reloads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let config = SceneConfig {
        shapes: vec![
            ShapeConfig::new(SphereDescriptor::new(0.5, 8, 12)),
            ShapeConfig::new(TorusDescriptor::new(0.1, 0.4, 16, 8))
                .with_render_mode(RenderMode::Textured),
        ],
    };
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(SceneConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    match SceneConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[shapes]\nkind = ").unwrap();

    assert!(matches!(SceneConfig::load(&path), Err(ConfigError::Parse(_))));
}
