use image::{GrayImage, Luma};
use platechars::{BoundingBox, Centroid, FrameDimensions, Region};

/// Creates a glyph-shaped region (10 wide, 20 tall, area 150) centered on
/// the given centroid. It passes the default shape filter.
pub fn glyph_at(row: f64, col: f64) -> Region {
    let min_row = (row - 10.0).max(0.0) as u32;
    let min_col = (col - 5.0).max(0.0) as u32;
    Region::new(
        BoundingBox::new(min_row, min_col, min_row + 20, min_col + 10),
        150,
        Centroid::new(row, col),
    )
}

/// Creates a region from an explicit box and area, centroid at the box center
pub fn region_with_box(min_row: u32, min_col: u32, max_row: u32, max_col: u32, area: u32) -> Region {
    Region::new(
        BoundingBox::new(min_row, min_col, max_row, max_col),
        area,
        Centroid::new(
            (min_row + max_row) as f64 / 2.0,
            (min_col + max_col) as f64 / 2.0,
        ),
    )
}

/// Glyphs on one row, one per column
pub fn glyph_row(row: f64, cols: &[f64]) -> Vec<Region> {
    cols.iter().map(|&col| glyph_at(row, col)).collect()
}

/// Sorted centroid columns of a region list
pub fn cols_of(regions: &[Region]) -> Vec<f64> {
    let mut cols: Vec<f64> = regions.iter().map(|r| r.centroid.col).collect();
    cols.sort_by(|a, b| a.total_cmp(b));
    cols
}

pub fn dims(width: u32, height: u32) -> FrameDimensions {
    FrameDimensions::new(width, height).expect("valid test dimensions")
}

/// Creates a white image with black filled rectangles `(min_row, min_col, max_row, max_col)`,
/// max exclusive
pub fn image_with_dark_boxes(width: u32, height: u32, boxes: &[(u32, u32, u32, u32)]) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let inside = boxes
            .iter()
            .any(|&(r0, c0, r1, c1)| y >= r0 && y < r1 && x >= c0 && x < c1);
        if inside { Luma([0u8]) } else { Luma([255u8]) }
    })
}
