//! Loading scene descriptions from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::reader::parser::{read_scene, ParseError};
use crate::scene::Scene;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and parse a scene description file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let scene = read_scene(&text)?;

    log::info!(
        "Loaded {}: {} spheres, {} planes, camera {}",
        path.display(),
        scene.sphere_count(),
        scene.plane_count(),
        if scene.camera.is_some() { "present" } else { "missing" }
    );
    if scene.shapes.is_empty() {
        log::warn!("Scene {} contains no shapes", path.display());
    }

    Ok(scene)
}
