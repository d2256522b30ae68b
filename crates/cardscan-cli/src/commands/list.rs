//! List command - show submitted contacts.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cardscan_core::models::contact::ContactRecord;
use cardscan_core::store::RecordStore;

use super::{load_config, open_store, OutputFormat};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show contacts whose name, company or email contain this text
    #[arg(short, long)]
    search: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
}

pub async fn run(args: ListArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config, args.store.as_deref())?;

    let records = match &args.search {
        Some(term) => store.search(term),
        None => store.list(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => print_records(&records),
    }

    Ok(())
}

fn print_records(records: &[ContactRecord]) {
    if records.is_empty() {
        println!("{} No submissions found", style("ℹ").blue());
        return;
    }

    for record in records {
        println!(
            "{}  {}",
            style(record.display_name()).bold(),
            style(record.submitted_at.format("%Y-%m-%d %H:%M")).dim()
        );
        if !record.company_name.is_empty() {
            println!("  Company:   {}", record.company_name);
        }
        println!("  Email:     {}", record.email);
        if !record.phone.is_empty() {
            println!("  Phone:     {}", record.phone);
        }
        if !record.whatsapp.is_empty() {
            println!("  WhatsApp:  {}", record.whatsapp);
        }
        if let Some(relevancy) = record.relevancy {
            println!("  Relevancy: {}", relevancy);
        }
        if !record.rep.is_empty() {
            println!("  Rep:       {}", record.rep);
        }
        println!("  ID:        {}", style(&record.id).dim());
    }

    println!();
    println!("{} submission(s)", records.len());
}
