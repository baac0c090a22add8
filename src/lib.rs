pub mod batch;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;

pub use config::{FilterParams, LineParams, OutlierParams, ShapeParams};
pub use detection::{LineFit, build_standard_pipeline, filter_by_line, filter_by_outlier, filter_by_shape};
pub use error::FilterError;
pub use models::{BoundingBox, Centroid, FrameDimensions, Region};
pub use pipeline::{Pipeline, PipelineContext, PipelineData, PipelineStep};
