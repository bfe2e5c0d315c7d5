use anyhow::Context;
use clap::Parser;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textgrab::config::Config;
use textgrab::engines;
use textgrab::extract::Extractor;
use textgrab::task;

#[derive(Parser, Debug)]
#[command(name = "textgrab")]
#[command(about = "Extract text from an image with OCR-oriented preprocessing")]
#[command(version)]
pub struct Args {
    /// Image file to read (PNG, JPEG, BMP or WEBP)
    pub image: PathBuf,

    /// Write the extracted text to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the result as JSON, including timing details
    #[arg(long)]
    pub json: bool,

    /// Language for OCR (e.g., "eng", "deu", "fra")
    #[arg(long, env = "TEXTGRAB_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Path to tessdata directory (downloaded on demand if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Tesseract page segmentation mode (6 = single uniform block of text)
    #[arg(long, env = "TEXTGRAB_PSM", default_value = "6")]
    pub psm: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            language: args.language.clone(),
            tessdata_path: args.tessdata_path.clone(),
            psm: args.psm,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(&args);

    tracing::info!("textgrab v{}", env!("CARGO_PKG_VERSION"));

    let decoded = image::open(&args.image)
        .with_context(|| format!("failed to load image {}", args.image.display()))?;
    // The pipeline expects plain RGB; strip any alpha channel here
    let image = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let engine = engines::default_engine(&config)?;
    let extractor = Arc::new(Extractor::new(engine));
    tracing::info!("Using {} engine", extractor.engine_name());

    let result = task::extract(extractor, image).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(path) = &args.output {
        std::fs::write(path, &result.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Wrote {} bytes to {}", result.text.len(), path.display());
    } else {
        print!("{}", result.text);
    }

    Ok(())
}
