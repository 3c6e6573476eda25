use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, Rgb32FImage, RgbImage};

use crate::color;
use crate::math::vec::RgbAsVec3Ext;

/// Write the raw radiance buffer; the format follows the extension, which
/// should be one that keeps the full float range (e.g. `.exr`).
pub fn save_hdr(image: &Rgb32FImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("saving HDR image to {}", path.display());
    image
        .save(path)
        .with_context(|| format!("failed to write HDR image {}", path.display()))
}

/// Tone-map to 8-bit (clamp then gamma 2.2) and write, typically `.png`.
pub fn save_ldr(image: &Rgb32FImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("saving LDR image to {}", path.display());
    let ldr = RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let clamped = color::clamp(*image.get_pixel(x, y)).vec();
        Rgb([
            (clamped.x.powf(1.0 / 2.2) * 255.0 + 0.5) as u8,
            (clamped.y.powf(1.0 / 2.2) * 255.0 + 0.5) as u8,
            (clamped.z.powf(1.0 / 2.2) * 255.0 + 0.5) as u8,
        ])
    });
    ldr.save(path)
        .with_context(|| format!("failed to write LDR image {}", path.display()))
}
