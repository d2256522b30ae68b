//! Core library for business-card contact capture.
//!
//! This crate provides:
//! - Contact field extraction from OCR'd card text (email, phone, name, company)
//! - WhatsApp number extraction from decoded QR payloads
//! - OCR and QR decoder seams, with pure Rust engines behind the `native` feature
//! - Contact record models, an append-only record store and CSV/XLSX export

pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod qr;
pub mod store;

pub use error::{CardscanError, Result};
pub use export::{to_delimited_text, to_spreadsheet_binary, ExportFilter, ExportFormat};
pub use extract::{extract_from_text, extract_phone_from_payload, BusinessCardParser, CardExtractor};
pub use models::config::{CardscanConfig, ExtractionConfig};
pub use models::contact::{ContactDraft, ContactRecord, ExtractionResult, Relevancy};
pub use ocr::{load_image, RecognitionProgress, Recognized, TextRecognizer};
pub use qr::{BarcodeDecoder, QrScan, ScanState};
pub use store::{JsonFileStore, MemoryStore, RecordStore};

#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
#[cfg(feature = "native")]
pub use qr::RqrrDecoder;
