//! Raycast Renderer - CPU ray casting
//!
//! Casts one ray per pixel through the camera's sensor, finds the nearest
//! shape along it and writes that shape's flat color.

mod bucket;
mod hittable;
mod intersect;
mod ppm;
mod renderer;
mod viewport;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use hittable::{cast_ray, HitRecord, Hittable};
pub use intersect::{plane_intersection, sphere_intersection};
pub use ppm::{write_ppm_p3, write_ppm_p6, PPM_MAX_VALUE};
pub use renderer::{color_to_rgb8, ray_color, render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderResult};
pub use viewport::Viewport;

/// Re-export common math types from raycast_math
pub use raycast_math::{Color, DVec3, Interval, Ray};
