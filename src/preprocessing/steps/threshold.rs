use image::GrayImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Binarize with Otsu's global threshold, inverted polarity.
///
/// The threshold minimizes intra-class intensity variance between the two
/// resulting pixel populations. Polarity is inverted relative to the naive
/// convention: pixels darker than the threshold become 255 (foreground ink),
/// lighter pixels become 0 (background). Dark-on-light source text therefore
/// comes out as white glyphs on black, the convention the OCR engine expects.
/// The inversion is unconditional; light-on-dark source material is not
/// detected or handled specially.
pub fn apply(image: &GrayImage) -> GrayImage {
    let level = otsu_level(image);
    threshold(image, level, ThresholdType::BinaryInverted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_threshold_binarizes_image() {
        // Simple gradient image
        let img = GrayImage::from_fn(50, 50, |x, _| Luma([(x as u8).saturating_mul(5)]));

        let result = apply(&img);

        // Result should only contain 0 or 255
        for pixel in result.pixels() {
            assert!(
                pixel.0[0] == 0 || pixel.0[0] == 255,
                "Expected binary pixel, got {}",
                pixel.0[0]
            );
        }
    }

    #[test]
    fn test_threshold_inverts_dark_text_on_light_background() {
        // Dark text stroke on a light page
        let mut img = GrayImage::from_pixel(50, 20, Luma([240]));
        for x in 10..40 {
            img.put_pixel(x, 10, Luma([20]));
        }

        let result = apply(&img);

        // Ink pixels become foreground (255), page becomes background (0)
        assert_eq!(result.get_pixel(25, 10).0[0], 255);
        assert_eq!(result.get_pixel(25, 5).0[0], 0);
    }

    #[test]
    fn test_threshold_twice_restores_binary_image() {
        // On a two-valued image the Otsu level lands between the two values,
        // so the inverted mapping swaps them; applying it again swaps back.
        let mut img = GrayImage::from_pixel(16, 16, Luma([255]));
        for x in 4..12 {
            for y in 4..12 {
                img.put_pixel(x, y, Luma([0]));
            }
        }

        let once = apply(&img);
        let twice = apply(&once);

        assert_eq!(twice.as_raw(), img.as_raw());
        for pixel in once.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }
}
