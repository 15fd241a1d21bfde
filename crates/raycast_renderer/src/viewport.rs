//! Pixel-to-ray mapping through the camera sensor.

use raycast_core::Camera;
use raycast_math::{DVec3, Ray};

/// Maps output pixels onto the camera's sensor plane.
///
/// The sensor sits at unit distance along +Z, centered on the axis. Rays
/// always start at the origin; the camera has no placement or rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub image_width: u32,
    pub image_height: u32,

    // Sensor half extents
    half_width: f64,
    half_height: f64,

    // Size of one pixel on the sensor
    pixel_width: f64,
    pixel_height: f64,
}

impl Viewport {
    /// Create a viewport for an output of `image_width` x `image_height` pixels.
    pub fn new(camera: &Camera, image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            half_width: camera.width / 2.0,
            half_height: camera.height / 2.0,
            pixel_width: camera.width / image_width as f64,
            pixel_height: camera.height / image_height as f64,
        }
    }

    /// Normalized ray through the center of pixel (x, y). Row 0 is the top.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let direction = DVec3::new(
            self.half_width - self.pixel_width * (x as f64 + 0.5),
            self.half_height - self.pixel_height * (y as f64 + 0.5),
            1.0,
        );
        Ray::from_origin(direction)
    }
}
