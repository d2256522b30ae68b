//! Contact record data models.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Partner types offered by the capture form.
pub const PARTNER_TYPES: &[&str] = &[
    "Authorized Reseller",
    "Distributor",
    "System Integrator",
    "Technology Partner",
    "Channel Partner",
    "OEM Partner",
];

/// Target regions offered by the capture form.
pub const TARGET_REGIONS: &[&str] = &[
    "North America",
    "South America",
    "Europe",
    "Asia Pacific",
    "Middle East",
    "Africa",
];

/// Tiers offered by the capture form.
pub const TIERS: &[&str] = &["Tier 1", "Tier 2", "Tier 3", "Enterprise"];

/// Lines of business offered by the capture form.
pub const LINES_OF_BUSINESS: &[&str] = &[
    "Healthcare",
    "Education",
    "Finance",
    "Manufacturing",
    "Retail",
    "Government",
];

/// Business-priority classification of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relevancy {
    High,
    Medium,
    Low,
}

impl Relevancy {
    /// All levels, highest first.
    pub const ALL: [Relevancy; 3] = [Relevancy::High, Relevancy::Medium, Relevancy::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relevancy::High => "High",
            Relevancy::Medium => "Medium",
            Relevancy::Low => "Low",
        }
    }
}

impl fmt::Display for Relevancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relevancy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Relevancy::High),
            "medium" | "med" => Ok(Relevancy::Medium),
            "low" => Ok(Relevancy::Low),
            other => Err(format!("unknown relevancy '{}', expected High, Medium or Low", other)),
        }
    }
}

/// Sparse contact fields inferred from a card or a QR payload.
///
/// Only inferred fields are present; everything else is left for the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

impl ExtractionResult {
    /// True when nothing was inferred.
    pub fn is_empty(&self) -> bool {
        self.found_fields().is_empty()
    }

    /// Names of the fields that were inferred.
    pub fn found_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("companyName", &self.company_name),
            ("whatsapp", &self.whatsapp),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_some())
        .map(|(k, _)| k)
        .collect()
    }
}

/// A contact as entered on the capture form, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub rep: String,
    pub relevancy: Option<Relevancy>,
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub partner_details: BTreeSet<String>,
    pub target_regions: BTreeSet<String>,
    pub lob: String,
    pub tier: String,
    pub grades: String,
    pub volume: String,
    pub add_associates: bool,
    pub notes: String,
    pub business_card_url: Option<String>,
}

impl ContactDraft {
    /// Copy inferred fields into empty draft fields.
    ///
    /// Anything the user already typed is left alone.
    pub fn prefill(&mut self, result: &ExtractionResult) {
        fill(&mut self.first_name, &result.first_name);
        fill(&mut self.last_name, &result.last_name);
        fill(&mut self.email, &result.email);
        fill(&mut self.phone, &result.phone);
        fill(&mut self.company_name, &result.company_name);
        fill(&mut self.whatsapp, &result.whatsapp);
    }

    /// Check the fields the form requires.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }
        Ok(())
    }
}

fn fill(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        if slot.trim().is_empty() {
            *slot = value.clone();
        }
    }
}

/// A submitted business contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Opaque unique identifier.
    pub id: String,

    /// Representative who captured the contact.
    #[serde(default)]
    pub rep: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevancy: Option<Relevancy>,

    #[serde(default)]
    pub company_name: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub whatsapp: String,

    /// Partner-type tags; order is not significant.
    #[serde(default)]
    pub partner_details: BTreeSet<String>,

    /// Target-region tags; order is not significant.
    #[serde(default)]
    pub target_regions: BTreeSet<String>,

    /// Line of business.
    #[serde(default)]
    pub lob: String,

    #[serde(default)]
    pub tier: String,

    #[serde(default)]
    pub grades: String,

    /// Volume bucket.
    #[serde(default)]
    pub volume: String,

    #[serde(default)]
    pub add_associates: bool,

    #[serde(default)]
    pub notes: String,

    /// Reference to the business-card image, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_card_url: Option<String>,

    /// Submission time; never changes after creation.
    pub submitted_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Validate a draft and stamp it with a fresh id and the current time.
    pub fn from_draft(draft: ContactDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self::stamped(draft, Uuid::new_v4().to_string(), Utc::now()))
    }

    /// Build a record with an explicit id and timestamp, skipping validation.
    pub fn stamped(draft: ContactDraft, id: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            rep: draft.rep,
            relevancy: draft.relevancy,
            company_name: draft.company_name,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            whatsapp: draft.whatsapp,
            partner_details: draft.partner_details,
            target_regions: draft.target_regions,
            lob: draft.lob,
            tier: draft.tier,
            grades: draft.grades,
            volume: draft.volume,
            add_associates: draft.add_associates,
            notes: draft.notes,
            business_card_url: draft.business_card_url,
            submitted_at,
        }
    }

    /// Full name for display.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Case-insensitive match against name, company and email.
    ///
    /// An empty term matches every record.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.first_name, &self.last_name, &self.company_name, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}
