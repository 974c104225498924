//! Decimation of a blurred grid.
//!
//! Keeps every second row starting at row 0. Within each kept row, columns
//! are taken in groups of [`COL_KEEP`] every [`COL_PERIOD`]: columns 0, 1, 2
//! survive, 3, 4, 5 are dropped, 6, 7, 8 survive, and so on. A final group
//! that runs past the row end is truncated, never padded, so for widths that
//! are not a multiple of 6 the last group is narrower than 3. Every row of a
//! rectangular input samples to the same length, so the output is itself a
//! rectangular grid of width [`subsampled_width`].
use crate::image::{ImageI32, ImageView, ImageViewMut};

/// Row decimation factor: rows 0, 2, 4, … survive.
pub const ROW_STEP: usize = 2;
/// Columns kept at the start of each period.
pub const COL_KEEP: usize = 3;
/// Distance between the starts of consecutive kept column groups.
pub const COL_PERIOD: usize = 6;

/// Width of the subsampled grid for a source width `w`.
#[inline]
pub fn subsampled_width(w: usize) -> usize {
    (w / COL_PERIOD) * COL_KEEP + (w % COL_PERIOD).min(COL_KEEP)
}

/// Height of the subsampled grid for a source height `h`.
#[inline]
pub fn subsampled_height(h: usize) -> usize {
    h.div_ceil(ROW_STEP)
}

/// Subsample a grid. Returns a new, smaller grid.
pub fn subsample(src: &ImageI32) -> ImageI32 {
    let mut out = ImageI32::new(subsampled_width(src.w), subsampled_height(src.h));
    for (dst_y, y) in (0..src.h).step_by(ROW_STEP).enumerate() {
        let src_row = src.row(y);
        let dst_row = out.row_mut(dst_y);
        let mut dst_x = 0usize;
        for start in (0..src.w).step_by(COL_PERIOD) {
            let group = &src_row[start..(start + COL_KEEP).min(src.w)];
            dst_row[dst_x..dst_x + group.len()].copy_from_slice(group);
            dst_x += group.len();
        }
    }
    out
}
