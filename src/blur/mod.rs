//! Separable 5-tap Gaussian blur over an integer grid.
//!
//! Purpose
//! - Smooth the image before subsampling so the decimation does not alias.
//!
//! Design
//! - Two passes, one per axis, each reading only the previous stage's grid
//!   and writing a fresh output. The output starts as a full copy of the
//!   input so border cells (and the degenerate no-op case) keep their
//!   original values; only in-range cells are overwritten.
//! - Tap weights are `[1, 4, 6, 4, 1] / 16` with integer truncation. The
//!   horizontal pass reads columns `x ± 3` and `x ± 6` inside a 9-column
//!   margin; the vertical pass reads rows `y ± 1` and `y ± 2` inside a
//!   3-row margin (see [`kernel`]).
//! - Images too narrow (`w < 18`) or too short (`h < 6`) have an empty blur
//!   range; the pass degrades to a plain copy.
//!
//! Complexity
//! - O(W·H) per pass, five reads per computed cell.

pub mod kernel;
pub mod trace;

use crate::image::{ImageI32, ImageView, ImageViewMut};
use kernel::{weigh, HORIZONTAL, VERTICAL};
use trace::{Axis, BlurObserver, NoopObserver, PixelTrace};

/// Blur along rows. Returns a new grid of identical dimensions.
pub fn horizontal_pass(src: &ImageI32) -> ImageI32 {
    horizontal_pass_observed(src, &mut NoopObserver)
}

/// Blur along columns. Returns a new grid of identical dimensions.
pub fn vertical_pass(src: &ImageI32) -> ImageI32 {
    vertical_pass_observed(src, &mut NoopObserver)
}

/// [`horizontal_pass`] reporting every computed pixel to `observer`.
pub fn horizontal_pass_observed(src: &ImageI32, observer: &mut dyn BlurObserver) -> ImageI32 {
    let mut out = src.clone();
    let range = HORIZONTAL.blur_range(src.w);
    let s = HORIZONTAL.spacing;
    for (y, (src_row, dst_row)) in src.rows().zip(out.rows_mut()).enumerate() {
        for x in range.clone() {
            let neighbors = [
                src_row[x - 2 * s],
                src_row[x - s],
                src_row[x],
                src_row[x + s],
                src_row[x + 2 * s],
            ];
            let blurred = weigh(neighbors);
            observer.on_pixel(&PixelTrace {
                axis: Axis::Horizontal,
                row: y,
                col: x,
                original: src_row[x],
                blurred,
                neighbors,
            });
            dst_row[x] = blurred;
        }
    }
    out
}

/// [`vertical_pass`] reporting every computed pixel to `observer`.
pub fn vertical_pass_observed(src: &ImageI32, observer: &mut dyn BlurObserver) -> ImageI32 {
    let mut out = src.clone();
    let range = VERTICAL.blur_range(src.h);
    let s = VERTICAL.spacing;
    for y in range {
        for x in 0..src.w {
            let neighbors = [
                src.get(x, y - 2 * s),
                src.get(x, y - s),
                src.get(x, y),
                src.get(x, y + s),
                src.get(x, y + 2 * s),
            ];
            let blurred = weigh(neighbors);
            observer.on_pixel(&PixelTrace {
                axis: Axis::Vertical,
                row: y,
                col: x,
                original: src.get(x, y),
                blurred,
                neighbors,
            });
            out.set(x, y, blurred);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    fn grid_of_rows(rows: Vec<Vec<i32>>) -> ImageI32 {
        ImageI32::from_rows(rows).expect("rectangular grid")
    }

    #[test]
    fn horizontal_pass_preserves_dimensions() {
        let src = grid_of_rows(vec![vec![5; 25]; 3]);
        let out = horizontal_pass(&src);
        assert_eq!((out.w, out.h), (src.w, src.h));
    }

    #[test]
    fn constant_row_is_a_fixed_point() {
        let src = grid_of_rows(vec![vec![7; 30]; 2]);
        assert_eq!(horizontal_pass(&src), src);
    }

    #[test]
    fn horizontal_pass_copies_nine_column_borders() {
        let row: Vec<i32> = (0..26).map(|x| x * x).collect();
        let src = grid_of_rows(vec![row.clone()]);
        let out = horizontal_pass(&src);
        assert_eq!(&out.row(0)[..9], &row[..9]);
        assert_eq!(&out.row(0)[26 - 9..], &row[26 - 9..]);
    }

    #[test]
    fn linear_ramp_passes_through_unchanged() {
        // Symmetric taps on a linear ramp average back to the centre value,
        // and 16 * x / 16 is exact, so the ramp survives the blur.
        let row: Vec<i32> = (0..40).collect();
        let src = grid_of_rows(vec![row; 2]);
        assert_eq!(horizontal_pass(&src), src);
    }

    #[test]
    fn horizontal_kernel_weights_known_samples() {
        // Width 19 blurs exactly one column, x = 9, reading 3, 6, 9, 12, 15.
        let mut row = vec![0i32; 19];
        row[3] = 16;
        row[6] = 32;
        row[9] = 48;
        row[12] = 8;
        row[15] = 4;
        let src = grid_of_rows(vec![row]);
        let out = horizontal_pass(&src);
        // (1*16 + 4*32 + 6*48 + 4*8 + 1*4) / 16 = 468 / 16, truncated.
        assert_eq!(out.get(9, 0), 29);
        assert_eq!(out.get(3, 0), 16);
        assert_eq!(out.get(15, 0), 4);
    }

    #[test]
    fn width_below_eighteen_is_a_no_op() {
        let src = grid_of_rows(vec![(0..10).map(|x| x * 3).collect(); 4]);
        assert_eq!(horizontal_pass(&src), src);
    }

    #[test]
    fn height_below_six_is_a_no_op() {
        let src = grid_of_rows(vec![vec![1, 2, 3], vec![9, 8, 7], vec![4, 5, 6]]);
        assert_eq!(vertical_pass(&src), src);
    }

    #[test]
    fn vertical_pass_copies_three_row_borders() {
        let rows: Vec<Vec<i32>> = (0..8).map(|y| vec![y * y; 4]).collect();
        let src = grid_of_rows(rows.clone());
        let out = vertical_pass(&src);
        for y in [0, 1, 2, 5, 6, 7] {
            assert_eq!(out.row(y), &rows[y][..], "row {y} must be copied");
        }
    }

    #[test]
    fn vertical_kernel_weights_known_samples() {
        // Height 7 blurs rows 3, reading rows 1..=5.
        let mut rows = vec![vec![0i32; 2]; 7];
        rows[1] = vec![16, 16];
        rows[2] = vec![32, 0];
        rows[3] = vec![48, 160];
        rows[4] = vec![8, 0];
        rows[5] = vec![4, 16];
        let src = grid_of_rows(rows);
        let out = vertical_pass(&src);
        assert_eq!(out.get(0, 3), 29);
        // (1*16 + 4*0 + 6*160 + 4*0 + 1*16) / 16 = 992 / 16 = 62
        assert_eq!(out.get(1, 3), 62);
    }

    #[test]
    fn vertical_pass_reads_horizontally_blurred_values_not_its_own_output() {
        // Rows 3 and 4 are both in range for h = 8; if the pass read its own
        // output, row 4 would see row 3's already-blurred value.
        let mut rows = vec![vec![0i32; 1]; 8];
        rows[3] = vec![160];
        let src = grid_of_rows(rows);
        let out = vertical_pass(&src);
        assert_eq!(out.get(0, 3), 60); // 6*160 / 16
        assert_eq!(out.get(0, 4), 40); // 4*160 / 16, from the *input* row 3
    }

    #[test]
    fn observer_sees_one_event_per_computed_pixel() {
        let src = grid_of_rows(vec![(0..20).collect(); 3]);
        let mut events = Vec::new();
        let mut record = |t: &PixelTrace| events.push(*t);
        horizontal_pass_observed(&src, &mut record);
        // Width 20: columns 9 and 10 in range, times 3 rows.
        assert_eq!(events.len(), 6);
        let first = events[0];
        assert_eq!(first.axis, Axis::Horizontal);
        assert_eq!((first.row, first.col), (0, 9));
        assert_eq!(first.original, 9);
        assert_eq!(first.neighbors, [3, 6, 9, 12, 15]);
        assert_eq!(first.blurred, 9);
    }

    #[test]
    fn borders_produce_no_events() {
        let src = grid_of_rows(vec![vec![5; 10]; 10]);
        let mut h_events = 0usize;
        horizontal_pass_observed(&src, &mut |_: &PixelTrace| h_events += 1);
        assert_eq!(h_events, 0); // width 10 < 18: nothing computed
        let mut v_events = 0usize;
        vertical_pass_observed(&src, &mut |_: &PixelTrace| v_events += 1);
        assert_eq!(v_events, 40); // rows 3..7, all 10 columns
    }
}
