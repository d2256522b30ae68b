//! Business-card parser combining the field rules.

use std::time::Instant;

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::contact::ExtractionResult;
use crate::ocr::Recognized;

use super::rules::{
    CompanyExtractor, EmailExtractor, FieldExtractor, NameExtractor, PhoneExtractor,
    WhatsAppExtractor,
};
use super::CardExtractor;

/// Rule-based parser for business-card text.
///
/// Holds only configuration, so one parser can be shared across threads.
#[derive(Debug, Clone)]
pub struct BusinessCardParser {
    names: NameExtractor,
    companies: CompanyExtractor,
}

impl BusinessCardParser {
    /// Create a parser with default thresholds and keywords.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a parser with thresholds and keywords from configuration.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            names: NameExtractor::from_config(config),
            companies: CompanyExtractor::from_config(config),
        }
    }

    /// Parse card text into whichever fields can be inferred.
    ///
    /// Empty or whitespace-only text yields an empty result.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut result = ExtractionResult::default();

        if text.trim().is_empty() {
            debug!("Card text is empty, nothing to extract");
            return result;
        }

        if let Some(email) = EmailExtractor.extract(text) {
            result.email = Some(email.value);
        }

        if let Some(phone) = PhoneExtractor.extract(text) {
            let (number, family) = phone.value;
            debug!("Phone matched by {:?} pattern", family);
            result.phone = Some(number);
        }

        if let Some(name) = self.names.extract(text) {
            result.first_name = Some(name.value.first);
            result.last_name = name.value.last;
        }

        if let Some(company) = self.companies.extract(text) {
            result.company_name = Some(company.value);
        }

        debug!(
            "Extracted {:?} from {} characters in {}us",
            result.found_fields(),
            text.len(),
            start.elapsed().as_micros()
        );

        result
    }

    /// Parse a decoded QR payload into a WhatsApp number, if it carries one.
    pub fn parse_payload(&self, payload: &str) -> ExtractionResult {
        let whatsapp = WhatsAppExtractor.extract(payload).map(|m| {
            let (number, source) = m.value;
            debug!("WhatsApp number found via {:?}", source);
            number
        });

        ExtractionResult {
            whatsapp,
            ..Default::default()
        }
    }
}

impl Default for BusinessCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardExtractor for BusinessCardParser {
    fn extract(&self, recognized: &Recognized) -> ExtractionResult {
        self.parse(&recognized.text)
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        self.parse(text)
    }
}
