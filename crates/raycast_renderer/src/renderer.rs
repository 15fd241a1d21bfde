//! Core ray casting renderer.
//!
//! Every pixel is a pure function of the scene, the viewport and the pixel
//! coordinates, so pixels can be evaluated in any order.

use raycast_core::{Scene, Shape};
use raycast_math::{Color, Interval, Ray};
use thiserror::Error;

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::hittable::cast_ray;
use crate::viewport::Viewport;

/// Errors that can occur when starting a render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Invalid output resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color of pixels whose ray hits nothing
    pub background: Color,
    /// Edge length of the tiles used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the color seen by a ray: the flat color of the nearest shape, or
/// the background.
pub fn ray_color(ray: &Ray, shapes: &[Shape], config: &RenderConfig) -> Color {
    match cast_ray(ray, shapes) {
        Some(hit) => hit.shape.color(),
        None => config.background,
    }
}

/// Render a single pixel.
pub fn render_pixel(viewport: &Viewport, shapes: &[Shape], x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = viewport.get_ray(x, y);
    ray_color(&ray, shapes, config)
}

/// Convert a color to 8-bit RGB (max value 255).
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Render output: row-major pixels, row 0 at the top, channels in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes (for saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Check the render preconditions and build the viewport.
pub(crate) fn prepare_viewport(scene: &Scene, width: u32, height: u32) -> RenderResult<Viewport> {
    let camera = scene.camera.as_ref().ok_or(RenderError::MissingCamera)?;
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }
    Ok(Viewport::new(camera, width, height))
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded renderer; see `render_parallel` for the
/// bucketed version.
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let viewport = prepare_viewport(scene, width, height)?;
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(&viewport, &scene.shapes, x, y, config);
            image.set(x, y, color);
        }
    }

    log::debug!("Rendered {}x{} over {} shapes", width, height, scene.shapes.len());

    Ok(image)
}
