//! Contact field extraction from card text and QR payloads.
//!
//! Everything here is a pure function of its input: no I/O, no shared
//! mutable state, and no error path. Fields that cannot be inferred are left
//! out of the result.

mod card;
pub mod rules;

pub use card::BusinessCardParser;

use crate::models::contact::ExtractionResult;
use crate::ocr::Recognized;

/// Trait for business-card field extractors.
pub trait CardExtractor {
    /// Extract contact fields from a completed recognition.
    fn extract(&self, recognized: &Recognized) -> ExtractionResult;

    /// Extract contact fields from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}

/// Extract contact fields from business-card text using default settings.
pub fn extract_from_text(raw_text: &str) -> ExtractionResult {
    BusinessCardParser::new().parse(raw_text)
}

/// Extract a WhatsApp phone number from a decoded QR payload.
pub fn extract_phone_from_payload(payload: &str) -> Option<String> {
    rules::extract_phone_from_payload(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_agent_007_is_never_a_name() {
        let result = extract_from_text("Agent 007\nsecret@mi6.gov.uk");
        assert_eq!(result.first_name, None);
        assert_eq!(result.last_name, None);
    }

    #[test]
    fn test_company_fallback_three_tokens() {
        let result = extract_from_text("Ann Lee\nQuantum Retail Partners\nann@qrp.com");
        assert_eq!(result.company_name.as_deref(), Some("Quantum Retail Partners"));
    }

    #[test]
    fn test_email_next_to_accented_letters() {
        assert_eq!(
            extract_from_text("Ann Lee\nann@acme.comé").email.as_deref(),
            Some("ann@acme.com")
        );
        assert_eq!(
            extract_from_text("Zoëinfo@acme.com").email.as_deref(),
            Some("info@acme.com")
        );
    }

    #[test]
    fn test_payload_examples() {
        assert_eq!(
            extract_phone_from_payload("https://wa.me/35699123456").as_deref(),
            Some("35699123456")
        );
        assert_eq!(
            extract_phone_from_payload("+35699123456").as_deref(),
            Some("+35699123456")
        );
        assert_eq!(extract_phone_from_payload("https://example.com/promo"), None);
    }

    proptest! {
        #[test]
        fn prop_no_at_sign_means_no_email(text in "[^@]{0,200}") {
            prop_assert_eq!(extract_from_text(&text).email, None);
        }

        #[test]
        fn prop_single_email_is_found(
            local in "[a-z][a-z0-9._]{0,10}[a-z0-9]",
            domain in "[a-z][a-z0-9]{0,10}",
            tld in "[a-z]{2,6}",
            before in "[A-Za-z ]{0,30}",
            after in "[A-Za-z ]{0,30}",
        ) {
            let email = format!("{}@{}.{}", local, domain, tld);
            let text = format!("{}\n{}\n{}", before, email, after);
            prop_assert_eq!(extract_from_text(&text).email, Some(email));
        }

        #[test]
        fn prop_extraction_is_idempotent(text in "\\PC{0,300}") {
            prop_assert_eq!(extract_from_text(&text), extract_from_text(&text));
        }

        #[test]
        fn prop_payload_extraction_never_panics(payload in "\\PC{0,120}") {
            let _ = extract_phone_from_payload(&payload);
        }
    }
}
