use crate::error::OcrError;
use image::GrayImage;

/// Trait that all OCR engines must implement
pub trait TextRecognizer: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize text in a preprocessed single-channel image.
    ///
    /// The returned string is the engine's raw output, unmodified. An empty
    /// string means the image contained no recognizable text; that is not an
    /// error.
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError>;
}
