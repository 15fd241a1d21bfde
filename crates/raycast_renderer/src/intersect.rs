//! Closed-form ray/primitive intersection.
//!
//! Both functions return the distance along the ray to the hit, or `None`
//! when there is no hit at a strictly positive distance.

use raycast_math::{DVec3, Ray};

/// Intersect a ray with a sphere.
///
/// Solves `a·t² + b·t + c = 0` and prefers the smaller root when it lies in
/// front of the origin.
pub fn sphere_intersection(ray: &Ray, center: DVec3, radius: f64) -> Option<f64> {
    let oc = ray.origin - center;
    let a = ray.direction.length_squared();
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    let t = (-b - sqrtd) / (2.0 * a);
    if t > 0.0 {
        return Some(t);
    }

    let t = (-b + sqrtd) / (2.0 * a);
    if t > 0.0 {
        return Some(t);
    }

    None
}

/// Intersect a ray with a plane given a point on it and its normal.
///
/// A ray parallel to the plane never hits, even when it lies inside it.
pub fn plane_intersection(ray: &Ray, position: DVec3, normal: DVec3) -> Option<f64> {
    let denominator = normal.dot(ray.direction);
    if denominator == 0.0 {
        return None;
    }

    let t = -normal.dot(ray.origin - position) / denominator;
    (t > 0.0).then_some(t)
}
