//! Spreadsheet (XLSX) export.

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::error::ExportError;
use crate::models::config::ExportConfig;
use crate::models::contact::ContactRecord;

use super::{record_row, ExportSummary, COLUMNS};

const SUMMARY_SHEET: &str = "Summary";

/// Render records as an XLSX workbook with default settings.
pub fn to_spreadsheet_binary(records: &[ContactRecord]) -> Result<Vec<u8>, ExportError> {
    to_spreadsheet_binary_with(records, &ExportConfig::default())
}

/// Render records as an XLSX workbook.
///
/// The first sheet holds one row per record under a bold header. Column
/// widths follow the longest cell plus two, capped at `max_column_width`.
pub fn to_spreadsheet_binary_with(
    records: &[ContactRecord],
    config: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let rows: Vec<[String; 18]> = records.iter().map(record_row).collect();
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(config.sheet_name.as_str())?;

    for (col, title) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header)?;

        let widest = rows
            .iter()
            .map(|row| row[col as usize].chars().count())
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0);
        sheet.set_column_width(col, column_width(widest, config.max_column_width) as f64)?;
    }

    for (i, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            sheet.write_string(i as u32 + 1, col as u16, cell.as_str())?;
        }
    }

    if config.include_summary {
        let summary = ExportSummary::from_records(records);
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        sheet.write_string_with_format(0, 0, "Metric", &header)?;
        sheet.write_string_with_format(0, 1, "Value", &header)?;
        sheet.set_column_width(0, 28)?;
        sheet.set_column_width(1, 10)?;

        for (i, (label, value)) in summary.rows().iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, *label)?;
            sheet.write_number(row, 1, *value as f64)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!("Wrote {} records as XLSX ({} bytes)", records.len(), bytes.len());
    Ok(bytes)
}

fn column_width(widest: usize, max: usize) -> usize {
    (widest + 2).min(max)
}
