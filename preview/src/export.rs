use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use noise_field::PixelBuffer;
use std::path::{Path, PathBuf};
use tracing::info;

/// Drops the alpha channel; fresh buffers leave it at zero.
pub fn to_rgb_image(pixels: &PixelBuffer) -> RgbImage {
    let size = pixels.size();
    RgbImage::from_fn(size.width, size.height, |x, y| {
        let [r, g, b, _] = pixels.pixel(x, y).unwrap_or_default();
        Rgb([r, g, b])
    })
}

pub fn save_png(pixels: &PixelBuffer, path: &Path) -> Result<()> {
    to_rgb_image(pixels).save(path).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// `noise.png` -> `noise_3.png`.
pub fn numbered_path(base: &Path, n: usize) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let ext = base.extension().and_then(|s| s.to_str()).unwrap_or("png");
    base.with_file_name(format!("{stem}_{n}.{ext}"))
}
