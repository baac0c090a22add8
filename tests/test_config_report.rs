//! Integration tests for parameter files and the text record.

mod common;

use platechars::config::load_config;
use platechars::report::{write_record, write_regions};
use std::io::Write;

use common::*;

#[test]
fn test_defaults_match_documented_constants() {
    let params = FilterParams::default();

    assert_eq!(params.shape.min_area, 100);
    assert_eq!(params.shape.max_area, 300);
    assert_eq!(params.shape.min_ratio, 0.2);
    assert_eq!(params.shape.max_ratio, 0.8);
    assert_eq!(params.line.max_orient_deg, 3);
    assert_eq!(params.line.max_radius, 170);
    assert_eq!(params.line.distance_tolerance, 4.0);
    assert_eq!(params.outlier.gap_tolerance, 110.0);
    assert_eq!(
        params.line.candidate_angles(),
        vec![87, 88, 89, 90, 91, 92, 93, 267, 268, 269, 270, 271, 272, 273]
    );
}

#[test]
fn test_load_partial_config() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "shape": {{ "max_area": 400 }}, "line": {{ "angle_centers_deg": [0, 180] }} }}"#
    )?;

    let params = load_config(file.path())?;

    assert_eq!(params.shape.max_area, 400);
    assert_eq!(params.shape.min_area, 100);
    assert_eq!(params.line.angle_centers_deg, vec![0, 180]);
    assert_eq!(params.line.max_radius, 170);
    assert_eq!(params.outlier, OutlierParams::default());
    Ok(())
}

#[test]
fn test_load_config_reports_bad_files() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let missing = dir.path().join("missing.json");
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json")?;

    let missing_err = load_config(&missing).unwrap_err().to_string();
    let broken_err = load_config(&broken).unwrap_err().to_string();

    assert!(missing_err.contains("Failed to read config"), "got: {}", missing_err);
    assert!(broken_err.contains("Failed to parse config"), "got: {}", broken_err);
    Ok(())
}

#[test]
fn test_write_regions_format() -> anyhow::Result<()> {
    let regions = vec![
        region_with_box(12, 30, 32, 40, 150),
        region_with_box(14, 52, 33, 61, 140),
    ];

    let mut out = Vec::new();
    write_regions(&mut out, &regions)?;

    assert_eq!(String::from_utf8(out)?, "2\n30 12 10 20\n52 14 9 19\n");
    Ok(())
}

#[test]
fn test_write_record_names_the_image() -> anyhow::Result<()> {
    let mut out = Vec::new();
    write_record(&mut out, "plate_01.jpg", &[])?;

    assert_eq!(String::from_utf8(out)?, "plate_01.jpg\n0\n");
    Ok(())
}

#[test]
fn test_plate_row_preset_only_turns_the_line_search() {
    let params = FilterParams::plate_row();

    assert_eq!(params.line.angle_centers_deg, vec![0, 180]);
    assert_eq!(params.line.max_radius, 170);
    assert_eq!(params.shape, ShapeParams::default());
    assert_eq!(params.outlier, OutlierParams::default());
}
