//! I/O helpers for integer grids and JSON.
//!
//! - `load_csv_image`: read a CSV of integers (one row per line) into an [`ImageI32`].
//! - `save_csv_image`: write an [`ImageI32`] back out as CSV.
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an 8-bit gray grid widened to `i32`.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageI32, ImageView};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a grid from a CSV file: one row per line, one integer per
/// comma-separated field. Blank lines are skipped.
pub fn load_csv_image(path: &Path) -> Result<ImageI32, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut rows = Vec::new();
    for (line_idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (field_idx, field) in line.split(',').enumerate() {
            let value = field.trim().parse::<i32>().map_err(|e| {
                format!(
                    "{} line {}, field {}: invalid integer {:?}: {e}",
                    path.display(),
                    line_idx + 1,
                    field_idx + 1,
                    field.trim()
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    ImageI32::from_rows(rows)
        .map_err(|e| format!("Invalid image in {}: {e}", path.display()))
}

/// Write a grid as CSV, one row per line.
pub fn save_csv_image(image: &ImageI32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = String::new();
    for row in image.rows() {
        let line: Vec<String> = row.iter().map(i32::to_string).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| format!("Failed to write CSV {}: {e}", path.display()))
}

/// Load a raster image from disk, convert to 8-bit grayscale and widen the
/// pixels to `i32`.
pub fn load_grayscale_image(path: &Path) -> Result<ImageI32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    if w == 0 || h == 0 {
        return Err(format!("{} decoded to an empty image", path.display()));
    }
    let data = img.into_raw().into_iter().map(i32::from).collect();
    Ok(ImageI32 { w, h, data })
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
