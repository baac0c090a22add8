use thiserror::Error;

/// Errors raised by the region filters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(
        "Invalid region #{index}: degenerate bounding box ({min_row}, {min_col}, {max_row}, {max_col})"
    )]
    InvalidRegion {
        index: usize,
        min_row: u32,
        min_col: u32,
        max_row: u32,
        max_col: u32,
    },

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
