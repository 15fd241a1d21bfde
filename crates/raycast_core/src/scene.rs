//! Scene types for raycast.
//!
//! A scene is one optional camera plus an ordered list of shapes. Values are
//! built once by the reader and only read afterwards.

use raycast_math::{Color, DVec3};

/// The virtual sensor the renderer casts rays through.
///
/// The sensor is centered on the +Z axis at unit distance from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Sensor width in world units (> 0)
    pub width: f64,

    /// Sensor height in world units (> 0)
    pub height: f64,
}

impl Camera {
    /// Create a new camera with the given sensor dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// Center point
    pub position: DVec3,

    /// Radius (> 0)
    pub radius: f64,

    /// Flat color (each channel in 0-1)
    pub color: Color,
}

impl Sphere {
    pub fn new(position: DVec3, radius: f64, color: Color) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }
}

/// An infinite plane primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Any point on the plane
    pub position: DVec3,

    /// Unit normal
    pub normal: DVec3,

    /// Flat color (each channel in 0-1)
    pub color: Color,
}

impl Plane {
    /// Create a new plane. The normal is normalized here so every stored
    /// plane has a unit normal.
    ///
    /// `normal` must be non-zero and finite; use [`Plane::try_new`] for
    /// unchecked input.
    pub fn new(position: DVec3, normal: DVec3, color: Color) -> Self {
        debug_assert!(
            normal.try_normalize().is_some(),
            "plane normal must be non-zero and finite, got {}",
            normal
        );
        Self {
            position,
            normal: normal.normalize(),
            color,
        }
    }

    /// Create a new plane, or `None` if the normal cannot be normalized.
    pub fn try_new(position: DVec3, normal: DVec3, color: Color) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            position,
            normal,
            color,
        })
    }
}

/// A renderable primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Flat color of the shape, valid for every variant.
    pub fn color(&self) -> Color {
        match self {
            Shape::Sphere(sphere) => sphere.color,
            Shape::Plane(plane) => plane.color,
        }
    }

    /// Reference point of the shape (sphere center or plane anchor).
    pub fn position(&self) -> DVec3 {
        match self {
            Shape::Sphere(sphere) => sphere.position,
            Shape::Plane(plane) => plane.position,
        }
    }

    /// Lowercase kind name as it appears in scene files.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

/// A complete scene ready for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// At most one camera
    pub camera: Option<Camera>,

    /// Shapes in declaration order
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Sphere(_)))
            .count()
    }

    /// Number of planes.
    pub fn plane_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Plane(_)))
            .count()
    }

    /// True when the scene has neither a camera nor shapes.
    pub fn is_empty(&self) -> bool {
        self.camera.is_none() && self.shapes.is_empty()
    }
}
