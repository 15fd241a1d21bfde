//! Hittable trait and nearest-hit resolution.

use raycast_core::{Plane, Shape, Sphere};
use raycast_math::{Interval, Ray};

use crate::intersect::{plane_intersection, sphere_intersection};

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance along the ray to the nearest strictly positive hit.
    fn hit(&self, ray: &Ray) -> Option<f64>;
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<f64> {
        sphere_intersection(ray, self.position, self.radius)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<f64> {
        plane_intersection(ray, self.position, self.normal)
    }
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Plane(plane) => plane.hit(ray),
        }
    }
}

/// Record of the nearest ray-shape intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// The shape that was hit
    pub shape: &'a Shape,
    /// Parameter t where the intersection occurs
    pub t: f64,
}

/// Find the nearest shape along a ray.
///
/// Shapes are tested in declaration order and a later shape only wins with a
/// strictly smaller distance, so ties go to the shape declared first.
pub fn cast_ray<'a>(ray: &Ray, shapes: &'a [Shape]) -> Option<HitRecord<'a>> {
    let mut closest = None;
    let mut ray_t = Interval::FORWARD;

    for shape in shapes {
        if let Some(t) = shape.hit(ray) {
            if ray_t.surrounds(t) {
                ray_t = ray_t.with_max(t);
                closest = Some(HitRecord { shape, t });
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycast_math::{Color, DVec3};

    fn sphere(z: f64, radius: f64, color: Color) -> Shape {
        Sphere::new(DVec3::new(0.0, 0.0, z), radius, color).into()
    }

    #[test]
    fn test_no_shapes_no_hit() {
        let ray = Ray::default();
        assert!(cast_ray(&ray, &[]).is_none());
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let near = sphere(5.0, 1.0, Color::new(1.0, 0.0, 0.0));
        let far = sphere(10.0, 1.0, Color::new(0.0, 1.0, 0.0));
        let ray = Ray::default();

        let in_order = [near, far];
        let hit = cast_ray(&ray, &in_order).unwrap();
        assert_eq!(hit.shape.color(), near.color());
        assert!((hit.t - 4.0).abs() < 1e-9);

        let reversed = [far, near];
        let hit = cast_ray(&ray, &reversed).unwrap();
        assert_eq!(hit.shape.color(), near.color());
    }

    #[test]
    fn test_equal_distance_first_declared_wins() {
        let first = sphere(5.0, 1.0, Color::new(1.0, 0.0, 0.0));
        let second = sphere(5.0, 1.0, Color::new(0.0, 0.0, 1.0));
        let ray = Ray::default();

        let shapes = [first, second];
        let hit = cast_ray(&ray, &shapes).unwrap();
        assert!(std::ptr::eq(hit.shape, &shapes[0]));
    }

    #[test]
    fn test_plane_and_sphere_mix() {
        let wall: Shape = Plane::new(DVec3::new(0.0, 0.0, 3.0), -DVec3::Z, Color::ONE).into();
        let ball = sphere(10.0, 1.0, Color::ZERO);
        let ray = Ray::default();

        let shapes = [ball, wall];
        let hit = cast_ray(&ray, &shapes).unwrap();
        assert!(matches!(hit.shape, Shape::Plane(_)));
        assert!((hit.t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_shapes_behind_are_ignored() {
        let behind = sphere(-5.0, 1.0, Color::ONE);
        let ray = Ray::default();
        assert!(cast_ray(&ray, &[behind]).is_none());
    }
}
