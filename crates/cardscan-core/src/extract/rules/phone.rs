//! Phone number extraction.
//!
//! Phone numbers are matched by pattern family, most specific first. The first
//! family that matches anywhere in the text wins and its first match is taken;
//! lower families are never consulted after that.

use regex::Regex;

use super::patterns::{
    PHONE_INTERNATIONAL, PHONE_NORTH_AMERICAN, PHONE_PLUS_DIGITS, PHONE_THREE_GROUP,
};
use super::{ExtractionMatch, FieldExtractor};

/// Phone pattern families in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFamily {
    /// `+` country code followed by grouped digits.
    International,
    /// Parenthesized North-American area code.
    NorthAmerican,
    /// Three separated digit groups.
    ThreeGroup,
    /// `+` followed directly by 10-15 digits.
    ///
    /// Every such number also matches `International`, so this family only
    /// wins when used on its own.
    PlusDigits,
}

impl PhoneFamily {
    /// All families, most specific first.
    pub const ALL: [PhoneFamily; 4] = [
        PhoneFamily::International,
        PhoneFamily::NorthAmerican,
        PhoneFamily::ThreeGroup,
        PhoneFamily::PlusDigits,
    ];

    /// Compiled pattern for this family.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            PhoneFamily::International => &PHONE_INTERNATIONAL,
            PhoneFamily::NorthAmerican => &PHONE_NORTH_AMERICAN,
            PhoneFamily::ThreeGroup => &PHONE_THREE_GROUP,
            PhoneFamily::PlusDigits => &PHONE_PLUS_DIGITS,
        }
    }
}

/// A phone match tagged with the family that produced it.
pub type PhoneMatch = ExtractionMatch<(String, PhoneFamily)>;

/// Phone field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    type Output = PhoneMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PhoneFamily::ALL.iter().find_map(|family| {
            family.pattern().find(text).map(|m| {
                ExtractionMatch::new((m.as_str().to_string(), *family), m.as_str())
                    .with_position(m.start(), m.end())
            })
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for family in PhoneFamily::ALL {
            for m in family.pattern().find_iter(text) {
                // Lower families often re-match part of a number already found
                let overlaps = results.iter().any(|r| match r.position {
                    Some((start, end)) => m.start() < end && start < m.end(),
                    None => false,
                });
                if !overlaps {
                    results.push(
                        ExtractionMatch::new((m.as_str().to_string(), family), m.as_str())
                            .with_position(m.start(), m.end()),
                    );
                }
            }
        }

        results
    }
}

/// Extract the phone number from text using first-family-wins precedence.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor.extract(text).map(|m| m.value.0)
}

/// Whether any phone family matches the text.
pub fn has_phone(text: &str) -> bool {
    PhoneFamily::ALL.iter().any(|f| f.pattern().is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international() {
        let m = PhoneExtractor.extract("Tel: +1 555 123 4567").unwrap();
        assert_eq!(m.value, ("+1 555 123 4567".to_string(), PhoneFamily::International));
    }

    #[test]
    fn test_north_american() {
        let m = PhoneExtractor.extract("Office (555) 123-4567").unwrap();
        assert_eq!(m.value, ("(555) 123-4567".to_string(), PhoneFamily::NorthAmerican));
    }

    #[test]
    fn test_three_group() {
        let m = PhoneExtractor.extract("Cell 555.123.4567").unwrap();
        assert_eq!(m.value, ("555.123.4567".to_string(), PhoneFamily::ThreeGroup));
    }

    #[test]
    fn test_first_family_wins_over_document_order() {
        // The parenthesized number comes first, but the international family
        // has priority.
        let text = "(555) 123-4567\nMobile +44 20 7946 0958";
        assert_eq!(extract_phone(text), Some("+44 20 7946 0958".to_string()));
    }

    #[test]
    fn test_plus_digits_is_covered_by_international() {
        assert!(PhoneFamily::PlusDigits.pattern().is_match("+35699123456"));
        let m = PhoneExtractor.extract("+35699123456").unwrap();
        assert_eq!(m.value, ("+35699123456".to_string(), PhoneFamily::International));
    }

    #[test]
    fn test_north_american_beats_earlier_three_group() {
        let m = PhoneExtractor.extract("555-987-6543\n(555) 123-4567").unwrap();
        assert_eq!(m.value, ("(555) 123-4567".to_string(), PhoneFamily::NorthAmerican));
    }

    #[test]
    fn test_no_phone() {
        assert_eq!(extract_phone("John Smith\nAcme Solutions"), None);
        assert_eq!(extract_phone("Suite 42"), None);
        assert!(!has_phone("Agent 007"));
    }

    #[test]
    fn test_extract_all_skips_overlaps() {
        let all = PhoneExtractor.extract_all("+1 555 123 4567 or 555-987-6543");
        let values: Vec<_> = all.iter().map(|m| m.value.0.as_str()).collect();
        assert_eq!(values, vec!["+1 555 123 4567", "555-987-6543"]);
    }
}
