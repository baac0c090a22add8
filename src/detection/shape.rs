use crate::config::ShapeParams;
use crate::error::FilterError;
use crate::models::Region;
use tracing::debug;

/// Keep regions whose area and width/height ratio fit a character glyph.
///
/// Both bounds are strict. Input order is preserved. Any degenerate bounding
/// box aborts the whole call, since it means the region source is broken.
pub fn filter_by_shape(regions: &[Region], params: &ShapeParams) -> Result<Vec<Region>, FilterError> {
    if let Some((index, region)) = regions
        .iter()
        .enumerate()
        .find(|(_, r)| r.bbox.is_degenerate())
    {
        let b = region.bbox;
        return Err(FilterError::InvalidRegion {
            index,
            min_row: b.min_row,
            min_col: b.min_col,
            max_row: b.max_row,
            max_col: b.max_col,
        });
    }

    let kept: Vec<Region> = regions
        .iter()
        .filter(|r| {
            let ratio = r.bbox.aspect_ratio();
            r.area > params.min_area
                && r.area < params.max_area
                && ratio > params.min_ratio
                && ratio < params.max_ratio
        })
        .cloned()
        .collect();

    debug!(input = regions.len(), kept = kept.len(), "shape filter");
    Ok(kept)
}
