//! Add command - submit a contact record.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardscan_core::extract::BusinessCardParser;
use cardscan_core::models::contact::{ContactDraft, ContactRecord, ExtractionResult, Relevancy};
use cardscan_core::qr::ScanState;
use cardscan_core::store::RecordStore;

use super::{load_config, open_store, recognize_card, scan_qr};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Representative who met the contact
    #[arg(long)]
    rep: Option<String>,

    /// Relevancy (High, Medium, Low)
    #[arg(long)]
    relevancy: Option<Relevancy>,

    /// Company name
    #[arg(long)]
    company: Option<String>,

    /// First name
    #[arg(long)]
    first_name: Option<String>,

    /// Last name
    #[arg(long)]
    last_name: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// WhatsApp number
    #[arg(long)]
    whatsapp: Option<String>,

    /// Partner type (repeatable)
    #[arg(long = "partner")]
    partners: Vec<String>,

    /// Target region (repeatable)
    #[arg(long = "region")]
    regions: Vec<String>,

    /// Line of business
    #[arg(long)]
    lob: Option<String>,

    /// Tier
    #[arg(long)]
    tier: Option<String>,

    /// Grades
    #[arg(long)]
    grades: Option<String>,

    /// Volume
    #[arg(long)]
    volume: Option<String>,

    /// The partner will add associates
    #[arg(long)]
    add_associates: bool,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,

    /// Prefill from a business-card photo
    #[arg(long, value_name = "IMAGE")]
    from_card: Option<PathBuf>,

    /// Prefill from a text file with card text
    #[arg(long, value_name = "FILE")]
    from_text: Option<PathBuf>,

    /// Prefill the WhatsApp number from a QR code image
    #[arg(long, value_name = "IMAGE")]
    from_qr: Option<PathBuf>,

    /// Model directory for --from-card
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Record store file (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Print the stored record as JSON
    #[arg(long)]
    json: bool,
}

impl AddArgs {
    /// Draft holding only what was passed on the command line.
    fn draft(&self) -> ContactDraft {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        ContactDraft {
            rep: text(&self.rep),
            relevancy: self.relevancy,
            company_name: text(&self.company),
            first_name: text(&self.first_name),
            last_name: text(&self.last_name),
            email: text(&self.email),
            phone: text(&self.phone),
            whatsapp: text(&self.whatsapp),
            partner_details: self.partners.iter().cloned().collect(),
            target_regions: self.regions.iter().cloned().collect(),
            lob: text(&self.lob),
            tier: text(&self.tier),
            grades: text(&self.grades),
            volume: text(&self.volume),
            add_associates: self.add_associates,
            notes: text(&self.notes),
            business_card_url: None,
        }
    }
}

pub async fn run(args: AddArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = BusinessCardParser::with_config(&config.extraction);
    let mut draft = args.draft();

    if let Some(card) = &args.from_card {
        let recognized = recognize_card(card, &config, args.model_dir.as_deref())?;
        let result = parser.parse(&recognized.text);
        debug!("Card prefill found {:?}", result.found_fields());
        draft.prefill(&result);
        draft.business_card_url = Some(card.display().to_string());
    }

    if let Some(path) = &args.from_text {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        let result = parser.parse(&fs::read_to_string(path)?);
        debug!("Text prefill found {:?}", result.found_fields());
        draft.prefill(&result);
    }

    if let Some(qr) = &args.from_qr {
        match scan_qr(qr)? {
            (ScanState::PhoneFound(number), _) => draft.prefill(&ExtractionResult {
                whatsapp: Some(number),
                ..Default::default()
            }),
            (ScanState::DecodeFailed, _) => {
                anyhow::bail!("No QR code found in {}", qr.display());
            }
            _ => eprintln!(
                "{} No phone number found in QR code, WhatsApp left empty",
                style("ℹ").blue()
            ),
        }
    }

    let record = ContactRecord::from_draft(draft)?;
    let mut store = open_store(&config, args.store.as_deref())?;
    store.append(record.clone())?;

    info!("Stored record {} in {}", record.id, store.path().display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!(
            "{} Saved {} ({})",
            style("✓").green(),
            record.display_name(),
            record.id
        );
    }

    Ok(())
}
