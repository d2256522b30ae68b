//! Export command - write submitted contacts to CSV or XLSX.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::info;

use cardscan_core::export::{to_delimited_text, to_spreadsheet_binary_with, ExportFilter, ExportFormat};
use cardscan_core::models::contact::Relevancy;
use cardscan_core::store::RecordStore;

use super::{load_config, open_store};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Export format (csv, xlsx)
    #[arg(short, long, default_value = "csv")]
    format: ExportFormat,

    /// Output file (default: business-contacts.csv or business-contacts-<date>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only contacts with this relevancy
    #[arg(long)]
    relevancy: Option<Relevancy>,

    /// Only contacts submitted on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from: Option<NaiveDate>,

    /// Only contacts submitted on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    to: Option<NaiveDate>,

    /// Only contacts whose company name contains this text
    #[arg(long)]
    company: Option<String>,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
}

pub async fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config, args.store.as_deref())?;

    let filter = ExportFilter {
        relevancy: args.relevancy,
        date_from: args.from,
        date_to: args.to,
        company: args.company.clone(),
    };
    let records = filter.apply(&store.list());
    info!("Exporting {} records as {}", records.len(), args.format);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name(Local::now().date_naive())));

    match args.format {
        ExportFormat::Csv => fs::write(&output_path, to_delimited_text(&records)?)?,
        ExportFormat::Xlsx => fs::write(
            &output_path,
            to_spreadsheet_binary_with(&records, &config.export)?,
        )?,
    }

    println!(
        "{} Exported {} contact(s) to {}",
        style("✓").green(),
        records.len(),
        output_path.display()
    );

    Ok(())
}
