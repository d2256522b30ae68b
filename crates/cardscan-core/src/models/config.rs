//! Configuration structures for the capture pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CardscanError, Result};

/// Main configuration for the cardscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardscanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Record store configuration.
    pub store: StoreConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

/// Business-card field extraction thresholds.
///
/// All bounds are exclusive and measured on the trimmed line in characters.
/// They were tuned by hand, not against a labelled corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Name candidates must be longer than this.
    pub name_min_len: usize,

    /// Name candidates must be shorter than this.
    pub name_max_len: usize,

    /// Maximum number of whitespace-separated tokens in a name line.
    pub name_max_tokens: usize,

    /// Fallback company lines must be longer than this.
    pub company_min_len: usize,

    /// Fallback company lines must be shorter than this.
    pub company_max_len: usize,

    /// Case-insensitive substrings that mark a line as a company name.
    pub company_keywords: Vec<String>,
}

/// Legal-entity suffixes and sector words seen on business cards.
pub const DEFAULT_COMPANY_KEYWORDS: &[&str] = &[
    "LLC",
    "Inc",
    "Corp",
    "Ltd",
    "Limited",
    "GmbH",
    "PLC",
    "Company",
    "Solutions",
    "Group",
    "Technologies",
    "Services",
    "Consulting",
    "Partners",
    "Holdings",
    "Industries",
    "Systems",
    "Software",
    "Digital",
    "Enterprises",
    "International",
    "Associates",
    "Agency",
    "Labs",
    "Ventures",
];

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_min_len: 2,
            name_max_len: 50,
            name_max_tokens: 4,
            company_min_len: 3,
            company_max_len: 100,
            company_keywords: DEFAULT_COMPANY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` tokens emitted by the recognizer instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.model_dir.join(model_name)
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding submitted records.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("submissions.json"),
        }
    }
}

/// Tabular export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Name of the records worksheet.
    pub sheet_name: String,

    /// Upper bound for auto-sized spreadsheet columns, in characters.
    pub max_column_width: usize,

    /// Add the summary worksheet to spreadsheet exports.
    pub include_summary: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Business Contacts".to_string(),
            max_column_width: 50,
            include_summary: true,
        }
    }
}

impl CardscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CardscanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CardscanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CardscanConfig =
            serde_json::from_str(r#"{"extraction": {"name_max_tokens": 3}}"#).unwrap();

        assert_eq!(config.extraction.name_max_tokens, 3);
        assert_eq!(config.extraction.name_max_len, 50);
        assert_eq!(config.export.sheet_name, "Business Contacts");
        assert!(config.extraction.company_keywords.iter().any(|k| k == "Holdings"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CardscanConfig::default();
        config.store.path = PathBuf::from("/tmp/contacts.json");
        config.save(&path).unwrap();

        let loaded = CardscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.store.path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(loaded.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"name_max_tokens": "many"}}"#).unwrap();

        let err = CardscanConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CardscanError::Config(_)));
        assert!(matches!(
            CardscanConfig::from_file(&dir.path().join("missing.json")),
            Err(CardscanError::Io(_))
        ));
    }
}
