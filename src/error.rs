use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    /// The input buffer is malformed: zero-sized or not a 3-channel color
    /// image. Surfaced to the caller; the pipeline produces no output.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// The OCR engine failed (missing language data, corrupt buffer, ...).
    /// Propagated unchanged; no retry is attempted.
    #[error("OCR engine failure: {0}")]
    EngineFailure(String),
}
