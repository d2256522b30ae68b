//! Error types for the cardscan-core library.
//!
//! Field extraction itself never fails: a field that cannot be inferred is
//! simply absent. The errors below belong to the collaborators around it.

use thiserror::Error;

/// Main error type for the cardscan library.
#[derive(Error, Debug)]
pub enum CardscanError {
    /// Text recognition error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Barcode decoding error.
    #[error("QR error: {0}")]
    Qr(#[from] QrError),

    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Tabular export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// A submitted record failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// QR scan flow was driven out of order.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors related to QR decoding.
///
/// "No code in the image" is not one of them; decoders report that as `None`.
#[derive(Error, Debug)]
pub enum QrError {
    /// Pixel buffer does not match the given dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Image could not be loaded for decoding.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors related to the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with this id is already stored.
    #[error("duplicate record id: {0}")]
    DuplicateId(String),

    /// The backing file could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid record list.
    #[error("corrupt store: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors related to tabular export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export.
    #[error("no data to export")]
    NoRecords,

    /// Delimited-text writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet writer failed.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Writer produced bytes that are not UTF-8.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Errors raised when a draft is turned into a record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors from the QR scan state machine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// Event not accepted in the current state.
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
}

/// Result type for the cardscan library.
pub type Result<T> = std::result::Result<T, CardscanError>;
