/// Recognizer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Language for OCR (e.g., "eng", "deu", "fra")
    pub language: String,
    /// Directory holding .traineddata files; downloaded on demand when unset
    pub tessdata_path: Option<String>,
    /// Tesseract page segmentation mode; 6 treats the image as a single
    /// uniform block of text
    pub psm: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            tessdata_path: None,
            psm: 6,
        }
    }
}
