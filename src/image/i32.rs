//! Owned single-channel i32 image in row-major layout.
//!
//! Pixels are signed 32-bit integers so the grid can hold anything an 8- or
//! 16-bit raster (or a hand-written CSV) produces. The rectangularity
//! invariant (`height >= 1`, every row of length `width`) is enforced at
//! construction; downstream passes rely on it and never re-check.
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageI32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<i32>,
}

impl ImageI32 {
    /// Construct a zero-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Build a grid from nested rows, validating the rectangularity invariant.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, Error> {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        if h == 0 || w == 0 {
            return Err(Error::EmptyImage);
        }
        let mut data = Vec::with_capacity(w * h);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != w {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: w,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(&row);
        }
        Ok(Self { w, h, data })
    }

    /// Copy the grid back out as nested rows for tabular consumers.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.data.chunks(self.w).map(|r| r.to_vec()).collect()
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageI32 {
    type Pixel = i32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageI32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
