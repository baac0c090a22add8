use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Size and proportion bounds for a single character glyph.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapeParams {
    pub min_area: u32,
    pub max_area: u32,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            min_area: 100,
            max_area: 300,
            min_ratio: 0.2,
            max_ratio: 0.8,
        }
    }
}

/// Search space of the centroid line accumulator.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LineParams {
    /// Allowed tilt, in whole degrees, around each angle center
    pub max_orient_deg: i32,
    /// Radii are searched in `[0, max_radius)`
    pub max_radius: i32,
    /// A centroid supports a line when it is closer than this, in pixels
    pub distance_tolerance: f64,
    /// Normal directions searched, visited in this order
    pub angle_centers_deg: Vec<i32>,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            max_orient_deg: 3,
            max_radius: 170,
            distance_tolerance: 4.0,
            angle_centers_deg: vec![90, 270],
        }
    }
}

impl LineParams {
    /// Candidate angles in enumeration order
    pub fn candidate_angles(&self) -> Vec<i32> {
        self.angle_centers_deg
            .iter()
            .flat_map(|center| (center - self.max_orient_deg)..=(center + self.max_orient_deg))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutlierParams {
    /// Largest horizontal gap, in pixels, allowed between neighboring characters
    pub gap_tolerance: f64,
}

impl Default for OutlierParams {
    fn default() -> Self {
        Self {
            gap_tolerance: 110.0,
        }
    }
}

/// Parameters for the whole filter chain.
///
/// Every field has a default, so a config file only needs the values it
/// overrides:
///
/// ```json
/// { "shape": { "max_area": 400 }, "outlier": { "gap_tolerance": 90 } }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterParams {
    pub shape: ShapeParams,
    pub line: LineParams,
    pub outlier: OutlierParams,
}

impl FilterParams {
    /// Defaults with the line search turned to rows of constant row index,
    /// which is how characters sit on an upright plate.
    pub fn plate_row() -> Self {
        Self {
            line: LineParams {
                angle_centers_deg: vec![0, 180],
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<FilterParams> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}
