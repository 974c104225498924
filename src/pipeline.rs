//! Pipeline driving the downsampling end-to-end.
//!
//! The flow is linear: horizontal blur → vertical blur → subsample. Each
//! stage reads the previous stage's grid and produces a fresh one, so the
//! vertical pass always sees horizontally-blurred values, never its own
//! partial output.
//!
//! Typical usage:
//! ```
//! use gdownsample::{downsample, ImageI32};
//!
//! let image = ImageI32::from_rows(vec![vec![100i32; 24]; 6]).unwrap();
//! let small = downsample(&image);
//! assert_eq!((small.w, small.h), (12, 3));
//! ```
use crate::blur::trace::BlurObserver;
use crate::blur::{
    horizontal_pass, horizontal_pass_observed, vertical_pass, vertical_pass_observed,
};
use crate::diagnostics::{DownsampleReport, InputDescriptor, StageReport};
use crate::error::Error;
use crate::image::ImageI32;
use crate::subsample::subsample;
use log::debug;
use std::time::Instant;

/// Downsample a grid: blur both axes, then decimate.
pub fn downsample(image: &ImageI32) -> ImageI32 {
    let blurred_h = horizontal_pass(image);
    let blurred = vertical_pass(&blurred_h);
    subsample(&blurred)
}

/// Row-oriented wrapper for callers at the tabular boundary. Rejects empty
/// or ragged input before any arithmetic runs.
pub fn downsample_rows(rows: Vec<Vec<i32>>) -> Result<Vec<Vec<i32>>, Error> {
    let image = ImageI32::from_rows(rows)?;
    Ok(downsample(&image).to_rows())
}

/// Pipeline front-end carrying an optional per-pixel blur observer.
#[derive(Default)]
pub struct Downsampler {
    observer: Option<Box<dyn BlurObserver>>,
}

impl Downsampler {
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Attach an observer that receives every computed blur pixel.
    pub fn with_observer(observer: Box<dyn BlurObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Run the pipeline, returning only the downsampled grid.
    pub fn process(&mut self, image: &ImageI32) -> ImageI32 {
        match self.observer.as_mut() {
            Some(obs) => {
                let blurred_h = horizontal_pass_observed(image, obs.as_mut());
                let blurred = vertical_pass_observed(&blurred_h, obs.as_mut());
                subsample(&blurred)
            }
            None => downsample(image),
        }
    }

    /// Run the pipeline and capture per-stage dimensions, means and timings.
    pub fn process_with_diagnostics(&mut self, image: &ImageI32) -> DownsampleReport {
        let input = InputDescriptor::from_image(image);
        let total_start = Instant::now();

        let stage_start = Instant::now();
        let blurred_h = match self.observer.as_mut() {
            Some(obs) => horizontal_pass_observed(image, obs.as_mut()),
            None => horizontal_pass(image),
        };
        let horizontal = StageReport::from_image(&blurred_h, elapsed_ms(stage_start));
        debug!(
            "horizontal pass: {}x{} in {:.3} ms",
            horizontal.width, horizontal.height, horizontal.elapsed_ms
        );

        let stage_start = Instant::now();
        let blurred = match self.observer.as_mut() {
            Some(obs) => vertical_pass_observed(&blurred_h, obs.as_mut()),
            None => vertical_pass(&blurred_h),
        };
        let vertical = StageReport::from_image(&blurred, elapsed_ms(stage_start));
        debug!(
            "vertical pass: {}x{} in {:.3} ms",
            vertical.width, vertical.height, vertical.elapsed_ms
        );

        let stage_start = Instant::now();
        let output = subsample(&blurred);
        let subsampled = StageReport::from_image(&output, elapsed_ms(stage_start));
        debug!(
            "subsample: {}x{} -> {}x{} in {:.3} ms",
            vertical.width, vertical.height, subsampled.width, subsampled.height, subsampled.elapsed_ms
        );

        DownsampleReport {
            input,
            horizontal,
            vertical,
            subsampled,
            total_ms: elapsed_ms(total_start),
            output,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
