//! Raycast Core - Scene model and scene description reader.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Shape`, `Sphere`, `Plane`
//! - **Scene reader**: strict single-pass parsing with per-field validation
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::read_scene;
//!
//! let scene = read_scene(r#"[{"type": "camera", "width": 1, "height": 1}]"#)?;
//! assert!(scene.camera.is_some());
//! ```

pub mod reader;
pub mod scene;

// Re-export commonly used types
pub use reader::{load_scene, read_scene, LoadError, ParseError};
pub use scene::{Camera, Plane, Scene, Shape, Sphere};
