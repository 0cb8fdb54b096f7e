//! PNG export of rendered frames

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Result;
use crate::renderer::{Color, Raster};

/// File stem used when the title is empty
pub const DEFAULT_STEM: &str = "download";

/// `<title>.png`, or `<title>-NNNN.png` for one frame of a sequence
pub fn file_name(title: &str, frame: Option<u64>) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();
    let stem = if stem.is_empty() { DEFAULT_STEM } else { stem.as_str() };

    match frame {
        Some(index) => format!("{}-{:04}.png", stem, index),
        None => format!("{}.png", stem),
    }
}

/// Copy a raster into an RGBA8 image
pub fn to_image(raster: &Raster) -> RgbaImage {
    use crate::renderer::Surface;

    RgbaImage::from_fn(raster.width(), raster.height(), |x, y| {
        Rgba(raster.pixel(x, y).unwrap_or(Color::TRANSPARENT).to_rgba8())
    })
}

/// Write a raster as PNG
pub fn save_png(raster: &Raster, path: &Path) -> Result<()> {
    to_image(raster).save_with_format(path, ImageFormat::Png)?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
