//! # textgrab
//!
//! Extracts text from images by running a fixed OCR-oriented preprocessing
//! pipeline (grayscale, 2x bilinear upscale, Gaussian blur, inverted Otsu
//! binarization) and handing the result to a Tesseract OCR engine.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;
pub mod preprocessing;
pub mod task;

// Re-export types for easier access
pub use config::Config;
pub use engine::TextRecognizer;
pub use error::OcrError;
pub use extract::{Extraction, Extractor};
