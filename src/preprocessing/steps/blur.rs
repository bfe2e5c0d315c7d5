use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

/// Gaussian kernel size used for noise suppression
const KERNEL_SIZE: u32 = 5;

/// Suppress high-frequency sensor/compression noise.
///
/// Must run before thresholding: surviving speckle noise would otherwise be
/// binarized as ink pixels.
pub fn apply(image: &GrayImage) -> GrayImage {
    gaussian_blur_f32(image, sigma_for_kernel(KERNEL_SIZE))
}

/// Standard deviation for a Gaussian kernel of the given size.
///
/// Standard derivation for an unspecified sigma:
/// `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
fn sigma_for_kernel(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_sigma_derived_from_kernel_size() {
        assert!((sigma_for_kernel(5) - 1.1).abs() < 1e-6);
        assert!((sigma_for_kernel(3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_blur_suppresses_speckle_noise() {
        let mut img = GrayImage::from_pixel(20, 20, Luma([128]));
        img.put_pixel(10, 10, Luma([255])); // isolated "salt" pixel
        img.put_pixel(5, 5, Luma([0])); // isolated "pepper" pixel

        let result = apply(&img);

        let original_variance = calculate_variance(&img);
        let result_variance = calculate_variance(&result);
        assert!(result_variance < original_variance);

        // The isolated pixels should have been pulled toward the background
        let salt = result.get_pixel(10, 10).0[0];
        assert!(salt < 200, "Expected blurred salt pixel, got {}", salt);
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = GrayImage::new(30, 17);
        let result = apply(&img);
        assert_eq!(result.dimensions(), (30, 17));
    }

    fn calculate_variance(img: &GrayImage) -> f64 {
        let pixels: Vec<f64> = img.pixels().map(|p| p.0[0] as f64).collect();
        let mean = pixels.iter().sum::<f64>() / pixels.len() as f64;
        pixels.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / pixels.len() as f64
    }
}
