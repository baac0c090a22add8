pub mod line;
pub mod outlier;
pub mod preprocessing;
pub mod regions;
pub mod shape;
pub mod steps;

use crate::config::FilterParams;
use crate::pipeline::Pipeline;
use std::sync::Arc;

pub use line::{LineFit, filter_by_line};
pub use outlier::filter_by_outlier;
pub use regions::{extract_regions, find_regions};
pub use shape::filter_by_shape;

/// Build the standard shape → line → outlier filter chain
pub fn build_standard_pipeline(params: &FilterParams) -> Pipeline {
    use steps::*;

    Pipeline::new()
        .add_step(Arc::new(ShapeFilterStep {
            params: params.shape.clone(),
        }))
        .add_step(Arc::new(LineAlignmentStep {
            params: params.line.clone(),
        }))
        .add_step(Arc::new(OutlierTrimStep {
            params: params.outlier.clone(),
        }))
}
