//! Hough-style search for the line that passes near the most region centroids.
//!
//! Lines are kept in normal form around the frame center: the set of points
//! `p` (in `(row, col)` order) with `(p - center) · n = r`, where
//! `n = (cos θ, sin θ)`. Only integer angles close to the configured centers
//! and integer radii in `[0, max_radius)` are scored, so the whole search is a
//! small, fixed grid.

use crate::config::LineParams;
use crate::error::FilterError;
use crate::models::{Centroid, FrameDimensions, Region};
use tracing::debug;

/// Best-supported line and the regions lying on it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFit {
    pub matched: Vec<Region>,
    pub angle_degrees: f64,
    pub radius: i32,
}

impl LineFit {
    fn empty() -> Self {
        Self {
            matched: Vec::new(),
            angle_degrees: 0.0,
            radius: 0,
        }
    }

    /// Whether any region supported a candidate line
    pub fn is_found(&self) -> bool {
        !self.matched.is_empty()
    }

    /// Unit normal of the fitted line, `(row, col)` components
    pub fn normal(&self) -> (f64, f64) {
        let theta = self.angle_degrees.to_radians();
        (theta.cos(), theta.sin())
    }

    /// End points where the line leaves the frame, for overlay rendering.
    ///
    /// Returns `None` when nothing was fitted.
    pub fn span(&self, dims: FrameDimensions) -> Option<(Centroid, Centroid)> {
        if !self.is_found() {
            return None;
        }
        let center = dims.center();
        let (n_row, n_col) = self.normal();
        let pivot_row = center.row + self.radius as f64 * n_row;
        let pivot_col = center.col + self.radius as f64 * n_col;
        // tangent = (-n_col, n_row)
        let (t_row, t_col) = (-n_col, n_row);

        if t_row.abs() >= t_col.abs() {
            let at_row = |row: f64| {
                let s = (row - pivot_row) / t_row;
                Centroid::new(row, pivot_col + s * t_col)
            };
            Some((at_row(0.0), at_row(dims.height as f64)))
        } else {
            let at_col = |col: f64| {
                let s = (col - pivot_col) / t_col;
                Centroid::new(pivot_row + s * t_row, col)
            };
            Some((at_col(0.0), at_col(dims.width as f64)))
        }
    }
}

/// Streaming accumulator over `(angle, radius)` cells. Keeps only the best
/// cell seen so far; a later cell must be strictly better to replace it.
struct LineAccumulator {
    best_angle: i32,
    best_radius: i32,
    best_members: Vec<usize>,
}

impl LineAccumulator {
    fn new() -> Self {
        Self {
            best_angle: 0,
            best_radius: 0,
            best_members: Vec::new(),
        }
    }

    fn offer(&mut self, angle: i32, radius: i32, members: Vec<usize>) {
        if members.len() > self.best_members.len() {
            self.best_angle = angle;
            self.best_radius = radius;
            self.best_members = members;
        }
    }
}

/// Find the line through the most centroids and return its supporters.
///
/// Ties keep the first cell in enumeration order: angle families in the order
/// given by `params.angle_centers_deg`, ascending angle inside a family, then
/// ascending radius.
pub fn filter_by_line(
    regions: &[Region],
    dims: FrameDimensions,
    params: &LineParams,
) -> Result<LineFit, FilterError> {
    dims.validate()?;
    if regions.is_empty() {
        return Ok(LineFit::empty());
    }

    let center = dims.center();
    let offsets: Vec<(f64, f64)> = regions
        .iter()
        .map(|r| (r.centroid.row - center.row, r.centroid.col - center.col))
        .collect();

    let mut acc = LineAccumulator::new();
    for angle in params.candidate_angles() {
        let theta = (angle as f64).to_radians();
        let (n_row, n_col) = (theta.cos(), theta.sin());
        let projections: Vec<f64> = offsets
            .iter()
            .map(|(d_row, d_col)| d_row * n_row + d_col * n_col)
            .collect();

        for radius in 0..params.max_radius {
            let members: Vec<usize> = projections
                .iter()
                .enumerate()
                .filter(|(_, p)| (radius as f64 - *p).abs() < params.distance_tolerance)
                .map(|(i, _)| i)
                .collect();
            acc.offer(angle, radius, members);
        }
    }

    if acc.best_members.is_empty() {
        debug!(input = regions.len(), "line filter found no supported line");
        return Ok(LineFit::empty());
    }

    let fit = LineFit {
        matched: acc
            .best_members
            .iter()
            .map(|&i| regions[i].clone())
            .collect(),
        angle_degrees: acc.best_angle as f64,
        radius: acc.best_radius,
    };
    debug!(
        input = regions.len(),
        matched = fit.matched.len(),
        degree = fit.angle_degrees,
        radius = fit.radius,
        "line filter"
    );
    Ok(fit)
}
