//! Rule-based field extractors for business cards and QR payloads.
//!
//! Each rule is independent and pure; `BusinessCardParser` decides how they
//! combine.

pub mod company;
pub mod email;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod whatsapp;

pub use company::CompanyExtractor;
pub use email::{extract_email, has_email, EmailExtractor};
pub use name::{NameExtractor, PersonName};
pub use phone::{extract_phone, has_phone, PhoneExtractor, PhoneFamily};
pub use whatsapp::{extract_phone_from_payload, WhatsAppExtractor, WhatsAppSource};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidates for the field, in precedence order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Non-empty trimmed lines in document order.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
