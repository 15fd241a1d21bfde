//! Object kinds, property keys, and the per-object builder used by the reader.

use std::fmt;

use raycast_math::{DVec3, Interval};

use crate::scene::{Camera, Plane, Shape, Sphere};

/// Kind of object named by the `"type"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Camera,
    Sphere,
    Plane,
}

impl ObjectKind {
    /// Look up a kind by its `"type"` value.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "camera" => Some(ObjectKind::Camera),
            "sphere" => Some(ObjectKind::Sphere),
            "plane" => Some(ObjectKind::Plane),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Camera => "camera",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Plane => "plane",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a property takes a single number or a 3-vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Vector,
}

/// A recognized property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Width,
    Height,
    Radius,
    Color,
    Position,
    Normal,
}

impl Property {
    /// Look up a property by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "width" => Some(Property::Width),
            "height" => Some(Property::Height),
            "radius" => Some(Property::Radius),
            "color" => Some(Property::Color),
            "position" => Some(Property::Position),
            "normal" => Some(Property::Normal),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
            Property::Radius => "radius",
            Property::Color => "color",
            Property::Position => "position",
            Property::Normal => "normal",
        }
    }

    /// The value syntax this property expects.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Property::Width | Property::Height | Property::Radius => ValueKind::Number,
            Property::Color | Property::Position | Property::Normal => ValueKind::Vector,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parsed property value, kept for error reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Vector(DVec3),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Vector(v) => write!(f, "[{}, {}, {}]", v.x, v.y, v.z),
        }
    }
}

/// Why a property assignment was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The key is not valid on this kind of object.
    NotApplicable,
    /// The key was already assigned on this object.
    Duplicate,
    /// The value is outside the allowed domain.
    Invalid,
}

/// A finished object, ready to be placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SceneObject {
    Camera(Camera),
    Shape(Shape),
}

/// Accumulates the properties of one object while it is being parsed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ObjectBuilder {
    Camera {
        width: Option<f64>,
        height: Option<f64>,
    },
    Sphere {
        position: Option<DVec3>,
        radius: Option<f64>,
        color: Option<DVec3>,
    },
    Plane {
        position: Option<DVec3>,
        normal: Option<DVec3>,
        color: Option<DVec3>,
    },
}

impl ObjectBuilder {
    pub(crate) fn new(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Camera => ObjectBuilder::Camera {
                width: None,
                height: None,
            },
            ObjectKind::Sphere => ObjectBuilder::Sphere {
                position: None,
                radius: None,
                color: None,
            },
            ObjectKind::Plane => ObjectBuilder::Plane {
                position: None,
                normal: None,
                color: None,
            },
        }
    }

    pub(crate) fn kind(&self) -> ObjectKind {
        match self {
            ObjectBuilder::Camera { .. } => ObjectKind::Camera,
            ObjectBuilder::Sphere { .. } => ObjectKind::Sphere,
            ObjectBuilder::Plane { .. } => ObjectKind::Plane,
        }
    }

    /// Assign a property, validating it against the object kind.
    pub(crate) fn apply(&mut self, property: Property, value: PropertyValue) -> Result<(), Rejection> {
        match value {
            PropertyValue::Number(n) => self.set_number(property, n),
            PropertyValue::Vector(v) => self.set_vector(property, v),
        }
    }

    fn set_number(&mut self, property: Property, value: f64) -> Result<(), Rejection> {
        let slot = match (self, property) {
            (ObjectBuilder::Camera { width, .. }, Property::Width) => width,
            (ObjectBuilder::Camera { height, .. }, Property::Height) => height,
            (ObjectBuilder::Sphere { radius, .. }, Property::Radius) => radius,
            _ => return Err(Rejection::NotApplicable),
        };

        if value <= 0.0 {
            return Err(Rejection::Invalid);
        }

        fill(slot, value)
    }

    fn set_vector(&mut self, property: Property, value: DVec3) -> Result<(), Rejection> {
        match property {
            Property::Color => {
                // Range is checked before the object kind
                if !is_unit_color(value) {
                    return Err(Rejection::Invalid);
                }
                match self {
                    ObjectBuilder::Sphere { color, .. } | ObjectBuilder::Plane { color, .. } => {
                        fill(color, value)
                    }
                    ObjectBuilder::Camera { .. } => Err(Rejection::NotApplicable),
                }
            }
            Property::Position => match self {
                ObjectBuilder::Sphere { position, .. } | ObjectBuilder::Plane { position, .. } => {
                    fill(position, value)
                }
                ObjectBuilder::Camera { .. } => Err(Rejection::NotApplicable),
            },
            Property::Normal => match self {
                ObjectBuilder::Plane { normal, .. } => {
                    let unit = value.try_normalize().ok_or(Rejection::Invalid)?;
                    fill(normal, unit)
                }
                _ => Err(Rejection::NotApplicable),
            },
            Property::Width | Property::Height | Property::Radius => Err(Rejection::NotApplicable),
        }
    }

    /// Close the object. Returns the first required property that was never set.
    pub(crate) fn finish(self) -> Result<SceneObject, Property> {
        match self {
            ObjectBuilder::Camera { width, height } => {
                let width = width.ok_or(Property::Width)?;
                let height = height.ok_or(Property::Height)?;
                Ok(SceneObject::Camera(Camera::new(width, height)))
            }
            ObjectBuilder::Sphere {
                position,
                radius,
                color,
            } => {
                let position = position.ok_or(Property::Position)?;
                let radius = radius.ok_or(Property::Radius)?;
                let color = color.ok_or(Property::Color)?;
                Ok(SceneObject::Shape(Shape::Sphere(Sphere::new(position, radius, color))))
            }
            ObjectBuilder::Plane {
                position,
                normal,
                color,
            } => {
                let position = position.ok_or(Property::Position)?;
                let normal = normal.ok_or(Property::Normal)?;
                let color = color.ok_or(Property::Color)?;
                Ok(SceneObject::Shape(Shape::Plane(Plane::new(position, normal, color))))
            }
        }
    }
}

fn fill<T>(slot: &mut Option<T>, value: T) -> Result<(), Rejection> {
    if slot.is_some() {
        return Err(Rejection::Duplicate);
    }
    *slot = Some(value);
    Ok(())
}

fn is_unit_color(color: DVec3) -> bool {
    Interval::UNIT.contains(color.x) && Interval::UNIT.contains(color.y) && Interval::UNIT.contains(color.z)
}
