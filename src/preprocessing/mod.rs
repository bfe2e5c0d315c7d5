//! Image preprocessing module for OCR enhancement
//!
//! Transforms a decoded color image into the binarized form the OCR engine
//! consumes.

pub mod pipeline;
pub mod steps;

pub use pipeline::{process, PreprocessingResult, StepTiming};
