use core::fmt;

/// Invalid-image conditions detected at the grid construction boundary.
///
/// The blur and subsample passes assume a rectangular, non-empty grid and do
/// not re-validate; constructing an [`crate::ImageI32`] is the single point
/// where these are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyImage,
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImage => write!(f, "image has no rows or no columns"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {row} has {actual} columns, expected {expected} (grid must be rectangular)"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
