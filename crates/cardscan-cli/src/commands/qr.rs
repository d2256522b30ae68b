//! QR command - decode a QR code and look for a WhatsApp number.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardscan_core::qr::ScanState;

use super::scan_qr;

/// Arguments for the qr command.
#[derive(Args)]
pub struct QrArgs {
    /// Image containing a QR code
    #[arg(required = true)]
    input: PathBuf,

    /// Print the decoded payload when it holds no phone number
    #[arg(long)]
    show_payload: bool,
}

pub async fn run(args: QrArgs) -> anyhow::Result<()> {
    info!("Decoding QR code in {}", args.input.display());

    let (state, payload) = scan_qr(&args.input)?;
    match state {
        ScanState::PhoneFound(number) => {
            println!("{}", number);
            eprintln!("{} WhatsApp number found", style("✓").green());
        }
        ScanState::PhoneNotFound => {
            eprintln!("{} No phone number found in QR code", style("ℹ").blue());
            if let (true, Some(payload)) = (args.show_payload, payload) {
                println!("{}", payload);
            }
        }
        ScanState::DecodeFailed => {
            anyhow::bail!("No QR code found in {}", args.input.display());
        }
        other => debug!("QR scan stopped in {:?}", other),
    }

    Ok(())
}
