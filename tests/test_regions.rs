//! Integration tests for the imageproc-backed region source.

mod common;

use image::DynamicImage;
use platechars::detection::{extract_regions, find_regions};

use common::*;

#[test]
fn test_find_regions_describes_components() {
    // Foreground is white in a binary image
    let binary = image::GrayImage::from_fn(80, 60, |x, y| {
        let first = (10..20).contains(&y) && (5..9).contains(&x);
        let second = (30..40).contains(&y) && (50..56).contains(&x);
        image::Luma([if first || second { 255u8 } else { 0u8 }])
    });

    let regions = find_regions(&binary);

    assert_eq!(regions.len(), 2);

    let first = &regions[0];
    assert_eq!(first.bbox, BoundingBox::new(10, 5, 20, 9));
    assert_eq!(first.area, 40);
    assert_eq!(first.centroid, Centroid::new(14.5, 6.5));

    let second = &regions[1];
    assert_eq!(second.bbox, BoundingBox::new(30, 50, 40, 56));
    assert_eq!(second.area, 60);
    assert_eq!(second.centroid, Centroid::new(34.5, 52.5));
}

#[test]
fn test_find_regions_on_blank_image() {
    let binary = image::GrayImage::new(30, 30);

    assert!(find_regions(&binary).is_empty());
}

#[test]
fn test_extract_regions_finds_dark_glyphs() -> anyhow::Result<()> {
    let img = image_with_dark_boxes(
        200,
        120,
        &[(50, 40, 70, 50), (50, 80, 70, 90), (50, 120, 70, 130)],
    );

    let (regions, frame) = extract_regions(&DynamicImage::ImageLuma8(img))?;

    assert_eq!(frame, dims(200, 120));
    assert_eq!(regions.len(), 3);
    for region in &regions {
        assert_eq!(region.bbox.height(), 20);
        assert_eq!(region.bbox.width(), 10);
        assert!((region.centroid.row - 59.5).abs() < 0.5, "row {}", region.centroid.row);
    }
    let cols = cols_of(&regions);
    for (col, expected) in cols.iter().zip([44.5, 84.5, 124.5]) {
        assert!((col - expected).abs() < 0.5, "col {} expected {}", col, expected);
    }
    Ok(())
}
