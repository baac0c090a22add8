use image::{DynamicImage, GrayImage};
use imageproc::contrast::{equalize_histogram, otsu_level};
use imageproc::distance_transform::Norm;
use imageproc::filter::sharpen_gaussian;
use imageproc::morphology::open;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Spread the intensity histogram to raise plate/character contrast.
///
/// This is global equalization, a stand-in for adaptive (CLAHE) equalization,
/// which `imageproc` does not provide. Unevenly lit plates get less local
/// contrast than CLAHE would give them.
pub fn equalize(img: &GrayImage) -> GrayImage {
    equalize_histogram(img)
}

/// Unsharp masking to crisp up glyph borders before thresholding
pub fn sharpen(img: &GrayImage, sigma: f32, amount: f32) -> GrayImage {
    sharpen_gaussian(img, sigma, amount)
}

/// Otsu binarization with dark pixels as foreground (255).
///
/// Plate characters are darker than the plate. `otsu_level` returns the top
/// of the dark class, so pixels at or below it are kept.
pub fn binarize_dark(img: &GrayImage) -> GrayImage {
    let level = otsu_level(img);
    let mut binary = img.clone();
    for pixel in binary.pixels_mut() {
        pixel[0] = if pixel[0] <= level { 255 } else { 0 };
    }
    binary
}

/// Morphological opening with a 3x3 cross to drop speckles
pub fn open_speckles(img: &GrayImage) -> GrayImage {
    open(img, Norm::L1, 1)
}
