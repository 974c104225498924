#![doc = include_str!("../README.md")]

pub mod blur;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod subsample;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + report.
pub use crate::pipeline::{downsample, downsample_rows, Downsampler};

pub use crate::diagnostics::DownsampleReport;
pub use crate::error::Error;
pub use crate::image::ImageI32;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use gdownsample::prelude::*;
///
/// let rows = vec![vec![7i32; 24]; 6];
/// let image = ImageI32::from_rows(rows).expect("rectangular grid");
/// let small = downsample(&image);
/// assert_eq!((small.w, small.h), (12, 3));
/// ```
pub mod prelude {
    pub use crate::image::ImageI32;
    pub use crate::{downsample, Downsampler, Error};
}
