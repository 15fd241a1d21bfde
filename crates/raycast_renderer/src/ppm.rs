//! PPM encoders for rendered images.

use std::io::Write;

use crate::renderer::{color_to_rgb8, ImageBuffer};

/// Channel maximum written to PPM headers.
pub const PPM_MAX_VALUE: u8 = 255;

/// Write a binary PPM (P6).
pub fn write_ppm_p6<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n{}\n", image.width, image.height, PPM_MAX_VALUE)?;
    writer.write_all(&image.to_rgb8())
}

/// Write a plain-text PPM (P3), one pixel per line.
pub fn write_ppm_p3<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "{}", PPM_MAX_VALUE)?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb8(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
