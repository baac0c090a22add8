use crate::detection::preprocessing;
use crate::models::{BoundingBox, Centroid, FrameDimensions, Region};
use anyhow::Result;
use image::{DynamicImage, GenericImageView, GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use std::collections::BTreeMap;
use tracing::debug;

/// Running statistics for one label
struct LabelStats {
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
    count: u32,
    row_sum: u64,
    col_sum: u64,
}

impl LabelStats {
    fn new(row: u32, col: u32) -> Self {
        Self {
            min_row: row,
            min_col: col,
            max_row: row,
            max_col: col,
            count: 1,
            row_sum: row as u64,
            col_sum: col as u64,
        }
    }

    fn add(&mut self, row: u32, col: u32) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
        self.count += 1;
        self.row_sum += row as u64;
        self.col_sum += col as u64;
    }

    fn into_region(self) -> Region {
        let n = self.count as f64;
        Region::new(
            BoundingBox::new(self.min_row, self.min_col, self.max_row + 1, self.max_col + 1),
            self.count,
            Centroid::new(self.row_sum as f64 / n, self.col_sum as f64 / n),
        )
    }
}

/// Describe every 8-connected foreground component of a binary image.
///
/// Regions come out in label order, which follows the raster scan.
pub fn find_regions(binary: &GrayImage) -> Vec<Region> {
    let labeled = connected_components(binary, Connectivity::Eight, Luma([0u8]));

    let mut stats: BTreeMap<u32, LabelStats> = BTreeMap::new();
    for (x, y, label) in labeled.enumerate_pixels() {
        let label = label[0];
        if label == 0 {
            continue;
        }
        stats
            .entry(label)
            .and_modify(|s| s.add(y, x))
            .or_insert_with(|| LabelStats::new(y, x));
    }

    stats.into_values().map(LabelStats::into_region).collect()
}

/// Turn a raw photo into candidate regions and its frame size.
///
/// All pixel work is delegated to `imageproc`; this only chains the steps.
pub fn extract_regions(img: &DynamicImage) -> Result<(Vec<Region>, FrameDimensions)> {
    let (width, height) = img.dimensions();
    let dims = FrameDimensions::new(width, height)?;

    let gray = preprocessing::to_grayscale(img);
    let gray = preprocessing::equalize(&gray);
    let gray = preprocessing::sharpen(&gray, 1.0, 1.0);
    let binary = preprocessing::binarize_dark(&gray);
    let binary = preprocessing::open_speckles(&binary);

    let regions = find_regions(&binary);
    debug!(width, height, regions = regions.len(), "extracted regions");
    Ok((regions, dims))
}
