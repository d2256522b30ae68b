//! Scan command - recognize a business-card photo and extract contact fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use cardscan_core::extract::BusinessCardParser;

use super::{format_fields, load_config, recognize_card, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Card photo (PNG, JPEG, ...)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Also print the recognized text
    #[arg(long)]
    show_text: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Scanning card: {}", args.input.display());

    let recognized = recognize_card(&args.input, &config, args.model_dir.as_deref())?;
    if recognized.text.trim().is_empty() {
        anyhow::bail!("No text detected in image");
    }

    let parser = BusinessCardParser::with_config(&config.extraction);
    let result = parser.parse(&recognized.text);

    if args.show_text {
        eprintln!("{}", style("Recognized text:").bold());
        for line in recognized.text.lines() {
            eprintln!("  {}", line);
        }
        eprintln!();
    }

    let output = format_fields(&result, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    eprintln!(
        "{} Found {} of 5 fields in {:?}",
        style("ℹ").blue(),
        result.found_fields().len(),
        start.elapsed()
    );

    Ok(())
}
