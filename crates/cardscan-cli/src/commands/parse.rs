//! Parse command - extract contact fields from card text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use cardscan_core::extract::BusinessCardParser;

use super::{format_fields, load_config, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text file, or "-" for stdin (default)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Treat the input as a decoded QR payload instead of card text
    #[arg(long)]
    payload: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let parser = BusinessCardParser::with_config(&config.extraction);
    let result = if args.payload {
        parser.parse_payload(&text)
    } else {
        parser.parse(&text)
    };

    println!("{}", format_fields(&result, args.format)?);

    Ok(())
}
