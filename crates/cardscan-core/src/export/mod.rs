//! Tabular export of stored contact records.
//!
//! Both writers share one column layout. Exporting zero records is an error
//! rather than an empty file.

mod delimited;
mod spreadsheet;

pub use delimited::to_delimited_text;
pub use spreadsheet::{to_spreadsheet_binary, to_spreadsheet_binary_with};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::contact::{ContactRecord, Relevancy};

/// Column headers, in export order.
pub const COLUMNS: [&str; 18] = [
    "ID",
    "Rep",
    "Relevancy",
    "Company Name",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "WhatsApp",
    "Partner Details",
    "Target Regions",
    "Line of Business",
    "Tier",
    "Grades",
    "Volume",
    "Add Associates",
    "Notes",
    "Submitted At",
];

/// One record as export cells, aligned with [`COLUMNS`].
pub fn record_row(record: &ContactRecord) -> [String; 18] {
    let join = |tags: &std::collections::BTreeSet<String>| {
        tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    };

    [
        record.id.clone(),
        record.rep.clone(),
        record.relevancy.map(|r| r.to_string()).unwrap_or_default(),
        record.company_name.clone(),
        record.first_name.clone(),
        record.last_name.clone(),
        record.email.clone(),
        record.phone.clone(),
        record.whatsapp.clone(),
        join(&record.partner_details),
        join(&record.target_regions),
        record.lob.clone(),
        record.tier.clone(),
        record.grades.clone(),
        record.volume.clone(),
        if record.add_associates { "Yes" } else { "No" }.to_string(),
        record.notes.clone(),
        record.submitted_at.to_rfc3339(),
    ]
}

/// Criteria for selecting records to export. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportFilter {
    pub relevancy: Option<Relevancy>,

    /// Earliest submission date, inclusive.
    pub date_from: Option<NaiveDate>,

    /// Latest submission date, inclusive.
    pub date_to: Option<NaiveDate>,

    /// Case-insensitive substring of the company name.
    pub company: Option<String>,
}

impl ExportFilter {
    pub fn matches(&self, record: &ContactRecord) -> bool {
        if let Some(relevancy) = self.relevancy {
            if record.relevancy != Some(relevancy) {
                return false;
            }
        }

        let date = record.submitted_at.date_naive();
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }

        match &self.company {
            Some(company) if !company.trim().is_empty() => record
                .company_name
                .to_lowercase()
                .contains(&company.trim().to_lowercase()),
            _ => true,
        }
    }

    /// Records that pass the filter, in their original order.
    pub fn apply(&self, records: &[ContactRecord]) -> Vec<ContactRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Aggregate figures for the summary sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub total: usize,
    pub unique_companies: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub with_associates: usize,
}

impl ExportSummary {
    pub fn from_records(records: &[ContactRecord]) -> Self {
        let companies: std::collections::BTreeSet<&str> = records
            .iter()
            .map(|r| r.company_name.trim())
            .filter(|c| !c.is_empty())
            .collect();
        let count = |level: Relevancy| {
            records
                .iter()
                .filter(|r| r.relevancy == Some(level))
                .count()
        };

        Self {
            total: records.len(),
            unique_companies: companies.len(),
            high: count(Relevancy::High),
            medium: count(Relevancy::Medium),
            low: count(Relevancy::Low),
            with_associates: records.iter().filter(|r| r.add_associates).count(),
        }
    }

    /// Label and value pairs, in sheet order.
    pub fn rows(&self) -> [(&'static str, usize); 6] {
        [
            ("Total Submissions", self.total),
            ("Unique Companies", self.unique_companies),
            ("High Relevancy", self.high),
            ("Medium Relevancy", self.medium),
            ("Low Relevancy", self.low),
            ("Partners with Associates", self.with_associates),
        ]
    }
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Default output file name for an export made on `today`.
    pub fn default_file_name(&self, today: NaiveDate) -> String {
        match self {
            ExportFormat::Csv => "business-contacts.csv".to_string(),
            ExportFormat::Xlsx => format!("business-contacts-{}.xlsx", today.format("%Y-%m-%d")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Xlsx => f.write_str("xlsx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::contact::ContactDraft;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    pub(crate) fn sample_record(
        id: &str,
        company: &str,
        relevancy: Option<Relevancy>,
        day: u32,
    ) -> ContactRecord {
        let draft = ContactDraft {
            rep: "Dana".to_string(),
            relevancy,
            company_name: company.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            partner_details: ["Distributor", "OEM Partner"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            add_associates: day % 2 == 0,
            ..Default::default()
        };
        let at = Utc.with_ymd_and_hms(2024, 3, day, 9, 30, 0).unwrap();
        ContactRecord::stamped(draft, id.to_string(), at)
    }

    #[test]
    fn test_record_row() {
        let row = record_row(&sample_record("r1", "Lee Labs", Some(Relevancy::High), 2));
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "r1");
        assert_eq!(row[2], "High");
        assert_eq!(row[9], "Distributor, OEM Partner");
        assert_eq!(row[15], "Yes");
        assert_eq!(row[17], "2024-03-02T09:30:00+00:00");
    }

    #[test]
    fn test_filter() {
        let records = vec![
            sample_record("a", "Lee Labs", Some(Relevancy::High), 1),
            sample_record("b", "Ray Corp", Some(Relevancy::Low), 5),
            sample_record("c", "Lee Holdings", None, 10),
        ];

        let by_company = ExportFilter {
            company: Some("LEE".to_string()),
            ..Default::default()
        };
        let ids: Vec<String> = by_company.apply(&records).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let by_dates = ExportFilter {
            date_from: NaiveDate::from_ymd_opt(2024, 3, 5),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 10),
            ..Default::default()
        };
        assert_eq!(by_dates.apply(&records).len(), 2);

        let by_relevancy = ExportFilter {
            relevancy: Some(Relevancy::Low),
            ..Default::default()
        };
        assert_eq!(by_relevancy.apply(&records)[0].id, "b");

        assert_eq!(ExportFilter::default().apply(&records).len(), 3);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            sample_record("a", "Lee Labs", Some(Relevancy::High), 2),
            sample_record("b", "Lee Labs", Some(Relevancy::High), 3),
            sample_record("c", "Ray Corp", Some(Relevancy::Medium), 4),
            sample_record("d", "", None, 5),
        ];
        let summary = ExportSummary::from_records(&records);
        assert_eq!(
            summary,
            ExportSummary {
                total: 4,
                unique_companies: 2,
                high: 2,
                medium: 1,
                low: 0,
                with_associates: 2,
            }
        );
    }

    #[test]
    fn test_default_file_names() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(ExportFormat::Csv.default_file_name(today), "business-contacts.csv");
        assert_eq!(
            ExportFormat::Xlsx.default_file_name(today),
            "business-contacts-2024-07-01.xlsx"
        );
        assert_eq!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Xlsx));
    }
}
