use crate::error::FilterError;

/// Bounding box of a labeled region, in pixel coordinates.
///
/// `max_row` and `max_col` are exclusive, so a single pixel at (r, c) has the
/// box `(r, c, r + 1, c + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl BoundingBox {
    pub fn new(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Self {
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    /// Horizontal extent, zero for degenerate boxes
    pub fn width(&self) -> u32 {
        self.max_col.saturating_sub(self.min_col)
    }

    /// Vertical extent, zero for degenerate boxes
    pub fn height(&self) -> u32 {
        self.max_row.saturating_sub(self.min_row)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Width over height. Callers must reject degenerate boxes first.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }
}

/// Sub-pixel center of mass of a region, `(row, col)` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub row: f64,
    pub col: f64,
}

impl Centroid {
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }
}

/// A connected component produced by the region source.
///
/// Filters never change a region, they only decide whether to keep it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub bbox: BoundingBox,
    pub area: u32,
    pub centroid: Centroid,
}

impl Region {
    pub fn new(bbox: BoundingBox, area: u32, centroid: Centroid) -> Self {
        Self {
            bbox,
            area,
            centroid,
        }
    }
}

/// Size of the frame the regions were extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDimensions {
    pub width: u32,
    pub height: u32,
}

impl FrameDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, FilterError> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Frame center as a centroid-style `(row, col)` point
    pub fn center(&self) -> Centroid {
        Centroid::new(self.height as f64 / 2.0, self.width as f64 / 2.0)
    }
}
