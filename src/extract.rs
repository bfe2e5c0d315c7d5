use crate::engine::TextRecognizer;
use crate::error::OcrError;
use crate::preprocessing::{self, StepTiming};
use image::DynamicImage;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Result of a full preprocess-and-recognize run
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// The engine's raw output, returned verbatim. Empty when the image
    /// contained no recognizable text.
    pub text: String,
    /// Total preprocessing time in milliseconds
    pub preprocessing_ms: u64,
    /// Time spent inside the OCR engine in milliseconds
    pub recognition_ms: u64,
    /// Individual preprocessing step timings
    pub steps: Vec<StepTiming>,
}

/// Runs the preprocessing pipeline and hands the result to an OCR engine.
///
/// The transformation either fully succeeds or fails before any output
/// exists; there is no partial-failure mode.
pub struct Extractor {
    engine: Arc<dyn TextRecognizer>,
}

impl Extractor {
    pub fn new(engine: Arc<dyn TextRecognizer>) -> Self {
        tracing::debug!(
            "Extractor created with engine {} ({})",
            engine.name(),
            engine.description()
        );
        Self { engine }
    }

    /// Returns the identifier of the configured engine
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Extract text from a color image.
    ///
    /// Runs the fixed preprocessing pipeline, then a single OCR call. No
    /// retries; the engine's output is not reinterpreted.
    pub fn extract(&self, image: &DynamicImage) -> Result<Extraction, OcrError> {
        let pre = preprocessing::process(image)?;

        let start = Instant::now();
        let text = self.engine.recognize(&pre.image)?;
        let recognition_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "OCR completed: engine={}, preprocessing={}ms, recognition={}ms, text length={}",
            self.engine.name(),
            pre.total_time_ms,
            recognition_ms,
            text.len()
        );

        Ok(Extraction {
            text,
            preprocessing_ms: pre.total_time_ms,
            recognition_ms,
            steps: pre.steps,
        })
    }
}
