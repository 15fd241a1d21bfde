//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon, then copied into one image buffer.

use rayon::prelude::*;

use raycast_core::{Scene, Shape};
use raycast_math::Color;

use crate::renderer::{prepare_viewport, render_pixel, ImageBuffer, RenderConfig, RenderResult};
use crate::viewport::Viewport;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering an image in row-major order.
///
/// Buckets on the right and bottom edges are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, viewport: &Viewport, shapes: &[Shape], config: &RenderConfig) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(viewport, shapes, global_x, global_y, config));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

impl ImageBuffer {
    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, chunk) in result.pixels.chunks(bucket.width as usize).enumerate() {
            for (column, color) in chunk.iter().enumerate() {
                self.set(bucket.x + column as u32, bucket.y + row as u32, *color);
            }
        }
    }
}

/// Render the entire scene on the rayon thread pool.
///
/// Produces exactly the same image as `render`.
pub fn render_parallel(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let viewport = prepare_viewport(scene, width, height)?;
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::debug!(
        "Rendering {} buckets of up to {}px on {} threads",
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, &viewport, &scene.shapes, config)))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{render, RenderError};
    use raycast_core::read_scene;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets
        assert_eq!(buckets[3], Bucket::new(64, 64, 36, 6));

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
    }

    #[test]
    fn test_zero_bucket_size_is_clamped() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = read_scene(
            r#"[
                {"type": "camera", "width": 2, "height": 1.5},
                {"type": "sphere", "position": [0.5, 0, 6], "radius": 1.5, "color": [1, 0, 0]},
                {"type": "sphere", "position": [-1, 0.5, 4], "radius": 0.75, "color": [0, 1, 0]},
                {"type": "plane", "position": [0, -1, 0], "normal": [0, 1, 0], "color": [0, 0, 1]}
            ]"#,
        )
        .unwrap();

        let config = RenderConfig {
            bucket_size: 7,
            ..Default::default()
        };

        let sequential = render(&scene, 41, 23, &config).unwrap();
        let parallel = render_parallel(&scene, 41, 23, &config).unwrap();
        assert_eq!(sequential, parallel);
        assert!(parallel.pixels.iter().any(|p| *p == Color::new(1.0, 0.0, 0.0)));
        assert!(parallel.pixels.iter().any(|p| *p == Color::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_parallel_checks_camera() {
        let scene = read_scene("[]").unwrap();
        assert_eq!(
            render_parallel(&scene, 8, 8, &RenderConfig::default()),
            Err(RenderError::MissingCamera)
        );
    }
}
