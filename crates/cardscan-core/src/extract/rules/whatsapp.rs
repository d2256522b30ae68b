//! WhatsApp number extraction from decoded QR payloads.
//!
//! A payload that carries no phone number is an ordinary outcome: QR codes
//! also hold plain URLs, text and vCards.

use regex::Regex;

use super::patterns::{BARE_PHONE, WHATSAPP_API_LINK, WHATSAPP_SEND_LINK, WHATSAPP_SHORT_LINK};
use super::{ExtractionMatch, FieldExtractor};

/// Where in the payload the number was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhatsAppSource {
    /// `wa.me/<digits>`
    ShortLink,
    /// `whatsapp.com/send?phone=<digits>`
    SendLink,
    /// `api.whatsapp.com/send?phone=<digits>`
    ApiLink,
    /// The whole payload is a phone number.
    BarePhone,
}

impl WhatsAppSource {
    /// Deep-link shapes in the order they are tried.
    const LINKS: [WhatsAppSource; 3] = [
        WhatsAppSource::ShortLink,
        WhatsAppSource::SendLink,
        WhatsAppSource::ApiLink,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            WhatsAppSource::ShortLink => &WHATSAPP_SHORT_LINK,
            WhatsAppSource::SendLink => &WHATSAPP_SEND_LINK,
            WhatsAppSource::ApiLink => &WHATSAPP_API_LINK,
            WhatsAppSource::BarePhone => &BARE_PHONE,
        }
    }
}

/// WhatsApp number extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppExtractor;

impl WhatsAppExtractor {
    fn from_links(payload: &str) -> impl Iterator<Item = ExtractionMatch<(String, WhatsAppSource)>> + '_ {
        WhatsAppSource::LINKS.into_iter().filter_map(move |source| {
            let caps = source.pattern().captures(payload)?;
            let number = caps.get(1)?;
            Some(
                ExtractionMatch::new((number.as_str().to_string(), source), caps.get(0)?.as_str())
                    .with_position(number.start(), number.end()),
            )
        })
    }

    fn from_bare_phone(payload: &str) -> Option<ExtractionMatch<(String, WhatsAppSource)>> {
        let trimmed = payload.trim();
        if !WhatsAppSource::BarePhone.pattern().is_match(trimmed) {
            return None;
        }
        Some(ExtractionMatch::new(
            (trimmed.to_string(), WhatsAppSource::BarePhone),
            trimmed,
        ))
    }
}

impl FieldExtractor for WhatsAppExtractor {
    type Output = ExtractionMatch<(String, WhatsAppSource)>;

    fn extract(&self, payload: &str) -> Option<Self::Output> {
        Self::from_links(payload)
            .next()
            .or_else(|| Self::from_bare_phone(payload))
    }

    fn extract_all(&self, payload: &str) -> Vec<Self::Output> {
        Self::from_links(payload)
            .chain(Self::from_bare_phone(payload))
            .collect()
    }
}

/// Extract a WhatsApp-reachable phone number from a decoded QR payload.
///
/// Returns the digit run (with its leading `+`, if any) from the first
/// matching deep-link shape, or the trimmed payload when it is itself a bare
/// phone number.
pub fn extract_phone_from_payload(payload: &str) -> Option<String> {
    WhatsAppExtractor.extract(payload).map(|m| m.value.0)
}
