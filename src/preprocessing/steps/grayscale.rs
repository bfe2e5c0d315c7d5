use image::{GrayImage, RgbImage};

/// Convert image to grayscale
/// This is the foundation for the remaining preprocessing steps
pub fn apply(image: &RgbImage) -> GrayImage {
    image::imageops::grayscale(image)
}
