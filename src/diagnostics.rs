//! Structured, serializable diagnostics for a pipeline run.
use crate::image::{ImageI32, ImageView};
use serde::Serialize;

/// Dimensions of the grid handed to the pipeline.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

impl InputDescriptor {
    pub fn from_image(image: &ImageI32) -> Self {
        Self {
            width: image.w,
            height: image.h,
        }
    }
}

/// Shape, mean value and wall time of one pipeline stage.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub width: usize,
    pub height: usize,
    pub mean_value: f64,
    pub elapsed_ms: f64,
}

impl StageReport {
    pub fn from_image(image: &ImageI32, elapsed_ms: f64) -> Self {
        let sum: i64 = image.rows().flatten().map(|&v| v as i64).sum();
        let denom = (image.w * image.h).max(1) as f64;
        Self {
            width: image.w,
            height: image.h,
            mean_value: sum as f64 / denom,
            elapsed_ms,
        }
    }
}

/// Full account of one downsampling run: per-stage reports plus the output
/// grid (skipped during serialization; the grid itself goes to the CSV
/// artifact, not the JSON report).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownsampleReport {
    pub input: InputDescriptor,
    pub horizontal: StageReport,
    pub vertical: StageReport,
    pub subsampled: StageReport,
    pub total_ms: f64,
    #[serde(skip)]
    pub output: ImageI32,
}
