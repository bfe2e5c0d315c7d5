//! Tesseract engine implementation
//!
//! Uses the tesseract-static crate for static linking (no system
//! dependencies). Initialization leaves the engine in its default mode,
//! which runs the combined legacy and LSTM recognizers; page segmentation
//! is pinned to a single uniform block of text. Downloads tessdata
//! (training data) automatically on first use.

use crate::config::Config;
use crate::engine::TextRecognizer;
use crate::error::OcrError;
use image::GrayImage;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tesseract_static::tesseract::Tesseract;

/// Tesseract OCR Engine
pub struct TesseractEngine {
    /// Path to tessdata directory
    tessdata_path: String,
    /// Language for OCR
    language: String,
    /// Page segmentation mode
    psm: u32,
}

impl TesseractEngine {
    /// Create a new Tesseract-based OCR engine
    pub fn new(config: &Config) -> Result<Self, OcrError> {
        let language = config.language.clone();

        // Ensure tessdata is available (download if needed)
        let tessdata_path = match &config.tessdata_path {
            Some(path) => path.clone(),
            None => ensure_tessdata_available(&language)?,
        };

        // Validate that tessdata is accessible by doing a test initialization
        let test_tess = Tesseract::new(Some(&tessdata_path), Some(&language)).map_err(|e| {
            OcrError::EngineFailure(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(test_tess);

        tracing::info!(
            "Tesseract engine initialized (tessdata: {}, language: {}, psm: {})",
            tessdata_path,
            language,
            config.psm
        );

        Ok(Self {
            tessdata_path,
            language,
            psm: config.psm,
        })
    }
}

impl TextRecognizer for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn description(&self) -> &'static str {
        "Tesseract OCR engine - combined legacy and LSTM recognizers"
    }

    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        let (width, height) = image.dimensions();

        // Convert to RGB8 and hand over as in-memory BMP (always supported
        // by leptonica)
        let rgb_img = image::DynamicImage::ImageLuma8(image.clone()).to_rgb8();
        let mut bmp_data = Vec::new();
        {
            let mut cursor = std::io::Cursor::new(&mut bmp_data);
            rgb_img
                .write_to(&mut cursor, image::ImageFormat::Bmp)
                .map_err(|e| {
                    OcrError::EngineFailure(format!("Failed to convert to BMP: {}", e))
                })?;
        }

        tracing::debug!(
            "Recognizing image: {}x{}, BMP size: {} bytes",
            width,
            height,
            bmp_data.len()
        );

        let mut tess = Tesseract::new(Some(&self.tessdata_path), Some(&self.language))
            .map_err(|e| OcrError::EngineFailure(format!("Failed to create Tesseract: {}", e)))?;

        tess = tess
            .set_variable("tessedit_pageseg_mode", &self.psm.to_string())
            .map_err(|e| {
                OcrError::EngineFailure(format!("Failed to set page segmentation mode: {}", e))
            })?;

        tess = tess.set_image_from_mem(&bmp_data).map_err(|e| {
            OcrError::EngineFailure(format!(
                "Failed to set image ({}x{}, {} bytes): {}",
                width,
                height,
                bmp_data.len(),
                e
            ))
        })?;

        tess = tess
            .recognize()
            .map_err(|e| OcrError::EngineFailure(format!("Failed to recognize text: {}", e)))?;

        tess.get_text()
            .map_err(|e| OcrError::EngineFailure(format!("Failed to get text: {}", e)))
    }
}

// ============================================================================
// Tessdata download helpers
// ============================================================================

/// Ensure tessdata is available, downloading if needed
fn ensure_tessdata_available(language: &str) -> Result<String, OcrError> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("textgrab")
        .join("tessdata");

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        OcrError::EngineFailure(format!("Failed to create tessdata directory: {}", e))
    })?;

    let traineddata_file = format!("{}.traineddata", language);
    let traineddata_path = cache_dir.join(&traineddata_file);

    // Download if not cached
    if !traineddata_path.exists() {
        let url = tessdata_url(language);
        tracing::info!(
            "Downloading tessdata for '{}' (this may take a moment)...",
            language
        );
        download_file(&url, &traineddata_path)?;
        tracing::info!("Downloaded tessdata to {:?}", traineddata_path);
    } else {
        tracing::info!("Using cached tessdata from {:?}", cache_dir);
    }

    // Tesseract expects the directory, not the file
    cache_dir
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| OcrError::EngineFailure("Invalid tessdata path".to_string()))
}

/// Get tessdata download URL for a language
fn tessdata_url(language: &str) -> String {
    // Use tessdata_fast for smaller, faster downloads
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}

/// Download a file from URL to path using ureq
fn download_file(url: &str, path: &Path) -> Result<(), OcrError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| OcrError::EngineFailure(format!("Failed to download tessdata: {}", e)))?;

    let mut file = File::create(path)
        .map_err(|e| OcrError::EngineFailure(format!("Failed to create tessdata file: {}", e)))?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        OcrError::EngineFailure(format!("Failed to read tessdata response: {}", e))
    })?;

    file.write_all(&buffer)
        .map_err(|e| OcrError::EngineFailure(format!("Failed to write tessdata file: {}", e)))?;

    Ok(())
}
