//! Delimited-text export.

use tracing::debug;

use crate::error::ExportError;
use crate::models::contact::ContactRecord;

use super::{record_row, COLUMNS};

/// Render records as CSV with a header row.
pub fn to_delimited_text(records: &[ContactRecord]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.write_record(record_row(record))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    debug!("Wrote {} records as CSV ({} bytes)", records.len(), bytes.len());

    String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_record;
    use crate::models::contact::Relevancy;

    #[test]
    fn test_empty_is_an_error() {
        assert!(matches!(to_delimited_text(&[]), Err(ExportError::NoRecords)));
    }

    #[test]
    fn test_header_and_rows() {
        let mut record = sample_record("r1", "Lee, Ray & Co", Some(Relevancy::Medium), 3);
        record.notes = "met at \"expo\"".to_string();

        let text = to_delimited_text(&[record]).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some(
                "ID,Rep,Relevancy,Company Name,First Name,Last Name,Email,Phone,WhatsApp,\
                 Partner Details,Target Regions,Line of Business,Tier,Grades,Volume,\
                 Add Associates,Notes,Submitted At"
            )
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("r1,Dana,Medium,\"Lee, Ray & Co\",Ann,Lee,"));
        assert!(row.contains("\"Distributor, OEM Partner\""));
        assert!(row.contains(",No,\"met at \"\"expo\"\"\","));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_parses_back_with_csv_reader() {
        let records = vec![
            sample_record("a", "Lee Labs", None, 1),
            sample_record("b", "Ray Corp", None, 2),
        ];
        let text = to_delimited_text(&records).unwrap();

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let ids: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
