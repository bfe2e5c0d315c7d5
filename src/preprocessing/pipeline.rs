use crate::error::OcrError;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::time::Instant;

use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult {
    /// Binarized image, 2x the input's linear dimensions
    pub image: GrayImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Transform a color image into the binarized form the OCR engine consumes.
///
/// Steps run in a fixed order: grayscale, upscale, blur, threshold. The
/// order is not interchangeable; blurring before thresholding keeps speckle
/// noise from being binarized as text.
///
/// Returns `InvalidImage` when the input is zero-sized or not a 3-channel
/// color image. No partially processed buffer is ever returned.
pub fn process(image: &DynamicImage) -> Result<PreprocessingResult, OcrError> {
    let rgb = match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            return Err(OcrError::InvalidImage(format!(
                "expected a 3-channel color image, got {:?}",
                other.color()
            )))
        }
    };

    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(OcrError::InvalidImage(format!(
            "zero-sized image: {}x{}",
            width, height
        )));
    }

    let start = Instant::now();
    let mut timings = Vec::new();

    let gray = run_step("grayscale", &mut timings, || steps::grayscale::apply(rgb));
    let scaled = run_step("upscale", &mut timings, || steps::upscale::apply(&gray));
    let blurred = run_step("blur", &mut timings, || steps::blur::apply(&scaled));
    let binary = run_step("threshold", &mut timings, || {
        steps::threshold::apply(&blurred)
    });

    let total_time_ms = start.elapsed().as_millis() as u64;

    tracing::debug!(
        "Preprocessed {}x{} -> {}x{} in {}ms",
        width,
        height,
        binary.width(),
        binary.height(),
        total_time_ms
    );

    Ok(PreprocessingResult {
        image: binary,
        total_time_ms,
        steps: timings,
    })
}

fn run_step<T, F>(name: &str, timings: &mut Vec<StepTiming>, step_fn: F) -> T
where
    F: FnOnce() -> T,
{
    let step_start = Instant::now();
    let result = step_fn();
    timings.push(StepTiming {
        name: name.to_string(),
        time_ms: step_start.elapsed().as_millis() as u64,
    });
    result
}
