use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

/// Decodes an in-memory image and normalises it to 8-bit RGBA.
pub fn decode_rgba(data: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(data)?;
    Ok(img.to_rgba8())
}

pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let data = std::fs::read(path)
        .with_context(|| format!("unable to read {}", path.display()))?;
    decode_rgba(&data)
        .with_context(|| format!("invalid image format: {}", path.display()))
}

pub fn save_png(path: &Path, img: &RgbaImage) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("unable to create {}", parent.display()))?;
        }
    }
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("unable to write {}", path.display()))?;
    log::info!("wrote {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}
