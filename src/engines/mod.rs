//! OCR engine implementations
//!
//! Implementations of the TextRecognizer trait for the available OCR
//! backends. Engines are conditionally compiled based on feature flags.

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

use crate::config::Config;
use crate::engine::TextRecognizer;
use crate::error::OcrError;
use std::sync::Arc;

/// Build the default engine for the current feature set.
#[cfg(feature = "engine-tesseract")]
pub fn default_engine(config: &Config) -> Result<Arc<dyn TextRecognizer>, OcrError> {
    Ok(Arc::new(tesseract::TesseractEngine::new(config)?))
}

/// Build the default engine for the current feature set.
#[cfg(not(feature = "engine-tesseract"))]
pub fn default_engine(_config: &Config) -> Result<Arc<dyn TextRecognizer>, OcrError> {
    Err(OcrError::EngineFailure(
        "No OCR engine available. Build with --features engine-tesseract".to_string(),
    ))
}
