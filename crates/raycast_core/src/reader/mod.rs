//! Scene description support for raycast.
//!
//! This module reads the textual scene format into a [`Scene`](crate::Scene):
//! a single array of `camera`, `sphere` and `plane` objects. Every property is
//! validated against the kind of object it is assigned to while parsing, so a
//! scene that reads successfully is ready to render.
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::reader::load_scene;
//!
//! let scene = load_scene("scenes/basic.json")?;
//! println!("Loaded {} shapes", scene.shape_count());
//! ```

mod loader;
mod parser;
mod types;

pub use loader::*;
pub use parser::*;
pub use types::{ObjectKind, Property, PropertyValue, ValueKind};
