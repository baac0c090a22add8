mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from platechars for tests
pub use platechars::{
    BoundingBox, Centroid, FilterError, FilterParams, FrameDimensions, LineParams, OutlierParams,
    Region, ShapeParams,
};
