//! Clear command - remove all submitted contacts.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cardscan_core::store::RecordStore;

use super::{load_config, open_store};

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm removal of every record
    #[arg(long)]
    yes: bool,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
}

pub async fn run(args: ClearArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut store = open_store(&config, args.store.as_deref())?;
    let count = store.list().len();

    if !args.yes {
        anyhow::bail!(
            "This will delete {} submission(s) from {}. Re-run with --yes to confirm.",
            count,
            store.path().display()
        );
    }

    store.clear()?;
    println!("{} Removed {} submission(s)", style("✓").green(), count);

    Ok(())
}
