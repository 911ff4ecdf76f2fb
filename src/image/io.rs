//! I/O helpers for the demo binary and tests.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_rgba_image`: write an RGBA buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable report to disk.
//!
//! The core pipeline itself performs no I/O; callers hand it decoded buffers.
use super::RgbaBuffer;
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to tightly packed RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaBuffer::new(width, height, img.into_raw())
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save an RGBA buffer to a PNG.
pub fn save_rgba_image(buffer: &RgbaBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = buffer.dimensions();
    let img: RgbaImage = RgbaImage::from_raw(w as u32, h as u32, buffer.as_bytes().to_vec())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    img.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
