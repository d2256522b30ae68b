//! Person name extraction.

use tracing::trace;

use crate::models::config::ExtractionConfig;

use super::email::has_email;
use super::patterns::NAME_LINE;
use super::phone::has_phone;
use super::{content_lines, ExtractionMatch, FieldExtractor};

/// A name split into first and last parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    /// Everything after the first token, single-space joined.
    pub last: Option<String>,
}

impl PersonName {
    /// Split a candidate line on whitespace.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let first = tokens.next()?.to_string();
        let rest: Vec<&str> = tokens.collect();
        let last = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };
        Some(Self { first, last })
    }
}

/// Name field extractor.
///
/// Picks the first line, top to bottom, that looks like a person's name.
#[derive(Debug, Clone)]
pub struct NameExtractor {
    min_len: usize,
    max_len: usize,
    max_tokens: usize,
}

impl NameExtractor {
    /// Create a name extractor with default thresholds.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a name extractor with thresholds from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            min_len: config.name_min_len,
            max_len: config.name_max_len,
            max_tokens: config.name_max_tokens,
        }
    }

    /// Check a trimmed line against every name predicate, in order.
    pub fn is_candidate(&self, line: &str) -> bool {
        let checks: [(&str, &dyn Fn(&str) -> bool); 5] = [
            ("length", &|l: &str| {
                let len = l.chars().count();
                len > self.min_len && len < self.max_len
            }),
            ("email", &|l: &str| !has_email(l)),
            ("phone", &|l: &str| !has_phone(l)),
            ("charset", &|l: &str| NAME_LINE.is_match(l)),
            ("tokens", &|l: &str| l.split_whitespace().count() <= self.max_tokens),
        ];

        for (check, passes) in checks {
            if !passes(line) {
                trace!("name candidate {:?} rejected by {} check", line, check);
                return false;
            }
        }
        true
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<PersonName>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        content_lines(text)
            .filter(|line| self.is_candidate(line))
            .filter_map(|line| PersonName::from_line(line).map(|n| ExtractionMatch::new(n, line)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> Option<PersonName> {
        NameExtractor::new().extract(text).map(|m| m.value)
    }

    #[test]
    fn test_two_tokens() {
        assert_eq!(
            name("John Smith\njohn@acme.com"),
            Some(PersonName {
                first: "John".to_string(),
                last: Some("Smith".to_string()),
            })
        );
    }

    #[test]
    fn test_multiple_last_name_tokens_are_joined() {
        let n = name("  Maria   de la Cruz  ").unwrap();
        assert_eq!(n.first, "Maria");
        assert_eq!(n.last.as_deref(), Some("de la Cruz"));
    }

    #[test]
    fn test_single_token() {
        let n = name("Madonna").unwrap();
        assert_eq!(n.first, "Madonna");
        assert_eq!(n.last, None);
    }

    #[test]
    fn test_digits_disqualify() {
        assert_eq!(name("Agent 007"), None);
        assert_eq!(name("Agent 007\nJames Bond").unwrap().first, "James");
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let extractor = NameExtractor::new();
        assert!(!extractor.is_candidate("Al")); // length 2
        assert!(extractor.is_candidate("Ali"));
        assert!(!extractor.is_candidate(&"A".repeat(50)));
        assert!(extractor.is_candidate(&"A".repeat(49)));
    }

    #[test]
    fn test_token_limit() {
        let extractor = NameExtractor::new();
        assert!(extractor.is_candidate("Anna Maria Lisa Berg"));
        assert!(!extractor.is_candidate("Anna Maria Lisa Berg Olsen"));
    }

    #[test]
    fn test_punctuation_disqualifies() {
        assert_eq!(name("Smith & Sons\n42 Main St."), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ExtractionConfig {
            name_max_tokens: 1,
            ..Default::default()
        };
        let extractor = NameExtractor::from_config(&config);
        assert_eq!(extractor.extract("John Smith\nCher").unwrap().value.first, "Cher");
    }
}
