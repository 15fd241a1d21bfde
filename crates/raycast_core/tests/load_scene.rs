use std::fs;
use std::path::PathBuf;

use raycast_core::reader::{Property, SemanticErrorKind};
use raycast_core::{load_scene, LoadError, ParseError, Shape};

/// Scene file in the temp directory, removed when dropped.
struct TempScene {
    path: PathBuf,
}

impl TempScene {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("raycast_core_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for TempScene {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_load_bundled_scene() {
    let _ = env_logger::builder().is_test(true).try_init();

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenes/basic.json");
    let scene = load_scene(&path).unwrap();

    let camera = scene.camera.expect("bundled scene has a camera");
    assert!(camera.width > 0.0 && camera.height > 0.0);
    assert!(scene.sphere_count() >= 1);
    assert!(scene.plane_count() >= 1);

    for shape in &scene.shapes {
        let color = shape.color();
        assert!((0.0..=1.0).contains(&color.x));
        assert!((0.0..=1.0).contains(&color.y));
        assert!((0.0..=1.0).contains(&color.z));
        if let Shape::Plane(plane) = shape {
            assert!((plane.normal.length() - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_temp_scene_is_removed() {
    let scene = TempScene::new("cleanup.json", "[]");
    let path = scene.path.clone();
    assert!(load_scene(&path).unwrap().is_empty());

    drop(scene);
    assert!(!path.exists());
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("raycast_core_tests_does_not_exist.json");
    match load_scene(&path) {
        Err(LoadError::Io(_)) => {}
        other => panic!("Expected IO error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_surfaces_through_loader() {
    let scene = TempScene::new(
        "bad_camera.json",
        "[\n  {\"type\": \"camera\", \"width\": 1, \"height\": 1},\n  {\"type\": \"camera\", \"width\": 1, \"height\": 1}\n]\n",
    );

    match load_scene(&scene.path) {
        Err(LoadError::Parse(ParseError::Semantic { line, kind, .. })) => {
            assert_eq!(line, 3);
            assert_eq!(kind, SemanticErrorKind::DuplicateCamera);
        }
        other => panic!("Expected duplicate camera, got {:?}", other),
    }
}

#[test]
fn test_validation_error_names_field() {
    let scene = TempScene::new(
        "bad_radius.json",
        r#"[{"type": "sphere", "radius": -1, "position": [0, 0, 1], "color": [1, 0, 0]}]"#,
    );

    match load_scene(&scene.path) {
        Err(LoadError::Parse(ParseError::Validation { property, .. })) => {
            assert_eq!(property, Property::Radius);
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}
