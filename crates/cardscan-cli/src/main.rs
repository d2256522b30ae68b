//! CLI application for business-card and WhatsApp QR contact capture.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{add, clear, config, export, list, parse, qr, scan};

/// cardscan - Capture business contacts from card photos and WhatsApp QR codes
#[derive(Parser)]
#[command(name = "cardscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize a business-card photo and extract contact fields
    Scan(scan::ScanArgs),

    /// Extract contact fields from card text
    Parse(parse::ParseArgs),

    /// Decode a QR code and look for a WhatsApp number
    Qr(qr::QrArgs),

    /// Submit a contact record
    Add(add::AddArgs),

    /// List submitted contacts
    List(list::ListArgs),

    /// Export submitted contacts to CSV or XLSX
    Export(export::ExportArgs),

    /// Remove all submitted contacts
    Clear(clear::ClearArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Scan(args) => scan::run(args, config_path).await,
        Commands::Parse(args) => parse::run(args, config_path).await,
        Commands::Qr(args) => qr::run(args).await,
        Commands::Add(args) => add::run(args, config_path).await,
        Commands::List(args) => list::run(args, config_path).await,
        Commands::Export(args) => export::run(args, config_path).await,
        Commands::Clear(args) => clear::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
