//! Company name extraction.
//!
//! Two passes: a line carrying a known business keyword wins outright;
//! otherwise the first line that looks like an organisation rather than a
//! person, an address or contact details is used.

use tracing::trace;

use crate::models::config::ExtractionConfig;

use super::email::has_email;
use super::patterns::TWO_WORD_NAME;
use super::phone::has_phone;
use super::{content_lines, ExtractionMatch, FieldExtractor};

/// Company field extractor.
#[derive(Debug, Clone)]
pub struct CompanyExtractor {
    /// Lowercased keywords.
    keywords: Vec<String>,
    min_len: usize,
    max_len: usize,
}

impl CompanyExtractor {
    /// Create a company extractor with the default keyword list.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a company extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            keywords: config
                .company_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            min_len: config.company_min_len,
            max_len: config.company_max_len,
        }
    }

    /// First line containing a business keyword, case-insensitively.
    pub fn keyword_line<'a>(&self, text: &'a str) -> Option<&'a str> {
        content_lines(text).find(|line| {
            let lower = line.to_lowercase();
            self.keywords.iter().any(|k| lower.contains(k.as_str()))
        })
    }

    /// First line that passes every fallback predicate, in order.
    pub fn fallback_line<'a>(&self, text: &'a str) -> Option<&'a str> {
        content_lines(text).find(|line| self.is_fallback_candidate(line))
    }

    fn is_fallback_candidate(&self, line: &str) -> bool {
        let checks: [(&str, &dyn Fn(&str) -> bool); 5] = [
            ("length", &|l: &str| {
                let len = l.chars().count();
                len > self.min_len && len < self.max_len
            }),
            ("email", &|l: &str| !has_email(l)),
            ("phone", &|l: &str| !has_phone(l)),
            ("person name", &|l: &str| !TWO_WORD_NAME.is_match(l)),
            ("uppercase", &|l: &str| l.chars().any(char::is_uppercase)),
        ];

        for (check, passes) in checks {
            if !passes(line) {
                trace!("company fallback {:?} rejected by {} check", line, check);
                return false;
            }
        }
        true
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.keyword_line(text)
            .or_else(|| self.fallback_line(text))
            .map(|line| ExtractionMatch::new(line.to_string(), line))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();
        let keyword_lines = content_lines(text).filter(|line| {
            let lower = line.to_lowercase();
            self.keywords.iter().any(|k| lower.contains(k.as_str()))
        });
        let fallback_lines = content_lines(text).filter(|line| self.is_fallback_candidate(line));

        for line in keyword_lines.chain(fallback_lines) {
            if !results.iter().any(|r| r.value == line) {
                results.push(ExtractionMatch::new(line.to_string(), line));
            }
        }
        results
    }
}
