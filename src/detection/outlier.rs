use crate::config::OutlierParams;
use crate::error::FilterError;
use crate::models::{FrameDimensions, Region};
use tracing::debug;

/// Drop end runs separated from their neighbor by an abnormally wide gap.
///
/// Regions are sorted by `centroid.col`. At each gap wider than the
/// tolerance, the side whose near region is farther from the horizontal
/// frame center is discarded. Cutting the left side keeps scanning; cutting
/// the right side stops at the first such gap.
pub fn filter_by_outlier(
    regions: &[Region],
    dims: FrameDimensions,
    params: &OutlierParams,
) -> Result<Vec<Region>, FilterError> {
    dims.validate()?;
    if regions.len() < 2 {
        return Ok(regions.to_vec());
    }

    let mut sorted = regions.to_vec();
    sorted.sort_by(|a, b| a.centroid.col.total_cmp(&b.centroid.col));

    let center = dims.center().col;
    let mut start = 0;
    let mut end = sorted.len();

    for (i, pair) in sorted.windows(2).enumerate() {
        let (left, right) = (pair[0].centroid.col, pair[1].centroid.col);
        if right - left <= params.gap_tolerance {
            continue;
        }
        if (center - left).abs() > (center - right).abs() {
            start = i + 1;
        } else {
            end = i + 1;
            break;
        }
    }

    debug!(input = regions.len(), start, end, "outlier filter");
    sorted.truncate(end);
    Ok(sorted.split_off(start))
}
