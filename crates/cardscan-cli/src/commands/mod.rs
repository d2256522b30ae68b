//! CLI subcommands and the helpers they share.

pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod list;
pub mod parse;
pub mod qr;
pub mod scan;

use std::path::{Path, PathBuf};

use console::style;
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use cardscan_core::models::config::CardscanConfig;
use cardscan_core::models::contact::ExtractionResult;
use cardscan_core::ocr::{PureOcrEngine, Recognized, TextRecognizer};
use cardscan_core::qr::{QrScan, RqrrDecoder, ScanState};
use cardscan_core::store::JsonFileStore;

/// Output format for extracted fields and listings.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardscan")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardscanConfig> {
    if let Some(path) = config_path {
        return Ok(CardscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(CardscanConfig::from_file(&default_path)?)
    } else {
        Ok(CardscanConfig::default())
    }
}

pub fn open_store(config: &CardscanConfig, path: Option<&Path>) -> anyhow::Result<JsonFileStore> {
    let path = path.unwrap_or(&config.store.path);
    debug!("Opening record store at {}", path.display());
    Ok(JsonFileStore::open(path)?)
}

pub fn load_image(path: &Path) -> anyhow::Result<DynamicImage> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(cardscan_core::load_image(path)?)
}

/// Run OCR on a card photo, reporting progress on a progress bar.
pub fn recognize_card(
    path: &Path,
    config: &CardscanConfig,
    model_dir: Option<&Path>,
) -> anyhow::Result<Recognized> {
    let mut ocr_config = config.ocr.clone();
    if let Some(dir) = model_dir {
        ocr_config.model_dir = dir.to_path_buf();
    }

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Loading image...");
    let image = load_image(path)?;

    pb.set_message("Loading OCR models...");
    let engine = PureOcrEngine::from_config(&ocr_config).map_err(|e| {
        anyhow::anyhow!(
            "{}\n\nPlace the detection, recognition and dictionary files in {} or pass --model-dir.",
            e,
            ocr_config.model_dir.display()
        )
    })?;

    let recognized = engine.recognize(&image, &mut |p| {
        pb.set_position((p.progress * 100.0) as u64);
        pb.set_message(p.status);
    })?;

    pb.finish_with_message("Done");
    debug!(
        "OCR detected {} text boxes in {}ms",
        recognized.boxes.len(),
        recognized.processing_time_ms
    );

    Ok(recognized)
}

/// Decode a QR image and walk the scan flow to its end state.
///
/// Returns the end state and the raw payload, if a code was decoded.
pub fn scan_qr(path: &Path) -> anyhow::Result<(ScanState, Option<String>)> {
    let image = load_image(path)?;
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();

    let mut scan = QrScan::new();
    let state = scan
        .run(&RqrrDecoder::new(), luma.as_raw(), width, height)?
        .clone();
    Ok((state, scan.payload().map(str::to_string)))
}

pub fn format_fields(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(format_fields_text(result)),
    }
}

fn format_fields_text(result: &ExtractionResult) -> String {
    let fields = [
        ("First name", &result.first_name),
        ("Last name", &result.last_name),
        ("Email", &result.email),
        ("Phone", &result.phone),
        ("Company", &result.company_name),
        ("WhatsApp", &result.whatsapp),
    ];

    let mut output = String::new();
    for (label, value) in fields {
        match value {
            Some(value) => output.push_str(&format!("{:<12} {}\n", format!("{}:", label), value)),
            None => output.push_str(&format!(
                "{:<12} {}\n",
                format!("{}:", label),
                style("-").dim()
            )),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fields_text() {
        let result = ExtractionResult {
            first_name: Some("Ann".to_string()),
            email: Some("ann@lee.org".to_string()),
            ..Default::default()
        };
        let text = format_fields_text(&result);
        assert!(text.contains("First name:  Ann"));
        assert!(text.contains("Email:       ann@lee.org"));
        assert_eq!(text.lines().count(), 6);
    }
}
