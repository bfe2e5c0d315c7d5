//! Worker-thread execution of the pipeline-plus-OCR sequence.
//!
//! The full transform and recognize sequence blocks for the duration of the
//! resize, blur, threshold and engine call. Interactive callers should await
//! [`extract`] instead of calling [`Extractor::extract`] on their event
//! thread, so input handling keeps running while recognition is in flight.

use crate::error::OcrError;
use crate::extract::{Extraction, Extractor};
use image::DynamicImage;
use std::sync::Arc;

/// Run the preprocessing pipeline and OCR call on a blocking worker.
///
/// The result is delivered back to the caller when the future resolves.
pub async fn extract(
    extractor: Arc<Extractor>,
    image: DynamicImage,
) -> Result<Extraction, OcrError> {
    tokio::task::spawn_blocking(move || extractor.extract(&image))
        .await
        .map_err(|e| OcrError::EngineFailure(format!("OCR worker task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TextRecognizer;
    use image::{GrayImage, Rgb, RgbImage};

    struct StubEngine;

    impl TextRecognizer for StubEngine {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn description(&self) -> &'static str {
            "Canned-response engine for tests"
        }

        fn recognize(&self, _image: &GrayImage) -> Result<String, OcrError> {
            Ok("off the event thread".to_string())
        }
    }

    #[tokio::test]
    async fn test_extract_delivers_result_to_caller() {
        let extractor = Arc::new(Extractor::new(Arc::new(StubEngine)));
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([200, 200, 200])));

        let result = extract(extractor, image).await.unwrap();
        assert_eq!(result.text, "off the event thread");
    }

    #[tokio::test]
    async fn test_invalid_image_error_crosses_the_worker_boundary() {
        let extractor = Arc::new(Extractor::new(Arc::new(StubEngine)));
        let image = DynamicImage::ImageRgb8(RgbImage::new(5, 0));

        let err = extract(extractor, image).await.unwrap_err();
        assert!(matches!(err, OcrError::InvalidImage(_)));
    }
}
