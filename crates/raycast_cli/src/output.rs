//! Writing rendered images to disk.
//!
//! `.ppm` files are written as binary PPM (P6) directly; every other
//! extension is handed to the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use raycast_renderer::{write_ppm_p6, ImageBuffer};

/// Save an image, choosing the format from the path extension.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_ppm_p6(image, &mut writer)?;
        writer.flush()?;
        return Ok(());
    }

    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("Image buffer does not match its dimensions")?;
    rgb.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycast_renderer::Color;

    #[test]
    fn test_save_image_by_extension() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));

        let dir = std::env::temp_dir();
        let stem = format!("raycast_cli_{}", std::process::id());

        let ppm = dir.join(format!("{}.ppm", stem));
        save_image(&image, &ppm).unwrap();
        let bytes = std::fs::read(&ppm).unwrap();
        assert!(bytes.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(bytes.len(), 11 + 6);

        std::fs::remove_file(&ppm).unwrap();

        let png = dir.join(format!("{}.png", stem));
        save_image(&image, &png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 0]);
        std::fs::remove_file(&png).unwrap();
    }
}
