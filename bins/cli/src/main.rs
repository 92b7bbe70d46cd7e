//! finstat CLI
//!
//! Usage:
//!   finstat generate --firm "M/s Rudra Earthmovers" --year "2024-25"
//!   finstat init --firm "New Firm" --year "2025-26" --category trader
//!
//! `generate` loads the firm's ledger and depreciation register, runs the
//! calculation engine and prints the Trading/P&L account, Balance Sheet
//! and depreciation chart; `init` seeds a new firm/year from a default
//! account-head template.

mod render;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finstat_core::depreciation::{DepreciationChart, RateTable};
use finstat_core::reports::{FirmDetails, StatementBuilder};
use finstat_core::template::{FirmCategory, LedgerTemplate};
use finstat_store::{AppConfig, FirmStore, export};

#[derive(Parser)]
#[command(name = "finstat", version, about = "Final accounts report generator")]
struct Cli {
    /// Data directory override.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute and print the Trading/P&L account, Balance Sheet and
    /// depreciation chart for a firm/year.
    Generate {
        /// Firm name (defaults to the configured firm).
        #[arg(long)]
        firm: Option<String>,
        /// Financial year label (defaults to the configured year).
        #[arg(long)]
        year: Option<String>,
        /// Also export the statements as CSV files into this directory.
        #[arg(long)]
        export: Option<PathBuf>,
        /// Print the full result as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },
    /// Seed a new firm/year ledger from a default account-head template.
    Init {
        /// Firm name.
        #[arg(long)]
        firm: String,
        /// Financial year label.
        #[arg(long)]
        year: String,
        /// Firm category: trader, manufacturer or service_provider.
        #[arg(long, default_value = "trader")]
        category: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finstat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let root = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    let store = FirmStore::new(root);

    match cli.command {
        Command::Generate {
            firm,
            year,
            export,
            json,
        } => generate(&store, &config, firm, year, export.as_deref(), json),
        Command::Init {
            firm,
            year,
            category,
        } => init(&store, &firm, &year, &category),
    }
}

fn generate(
    store: &FirmStore,
    config: &AppConfig,
    firm: Option<String>,
    year: Option<String>,
    export_dir: Option<&std::path::Path>,
    json: bool,
) -> anyhow::Result<()> {
    let firm = firm.unwrap_or_else(|| config.firm.name.clone());
    if firm.is_empty() {
        bail!("firm name required (--firm or [firm].name in config)");
    }
    let year = year.unwrap_or_else(|| config.firm.financial_year.clone());
    if year.is_empty() {
        bail!("financial year required (--year or [firm].financial_year in config)");
    }

    let template = LedgerTemplate::for_category(FirmCategory::Trader);
    let ledger = store.load_ledger_or_template(&firm, &year, &template)?;
    let register = store.load_register(&firm, &year)?;
    info!(
        firm = %firm,
        year = %year,
        ledger_rows = ledger.len(),
        register_rows = register.len(),
        "inputs loaded"
    );

    let mut rates = RateTable::standard();
    rates.apply_overrides(&config.rates);
    let chart = DepreciationChart::build(&register, &rates);

    let details = FirmDetails {
        name: firm,
        address: config.firm.address.clone(),
        financial_year: year,
    };
    let statements = StatementBuilder::build(details, &ledger, &chart);

    if !statements.result.is_balanced {
        warn!(
            sources = %statements.result.sources_total,
            application = %statements.result.application_total,
            "Balance Sheet does not reconcile"
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&statements)?);
    } else {
        render::print_statements(&statements);
    }

    if let Some(dir) = export_dir {
        export::export_all(dir, &statements)?;
    }

    Ok(())
}

fn init(store: &FirmStore, firm: &str, year: &str, category: &str) -> anyhow::Result<()> {
    let Some(category) = FirmCategory::from_label(category) else {
        bail!("unknown firm category '{category}' (expected trader, manufacturer or service_provider)");
    };

    let template = LedgerTemplate::for_category(category);
    store.init_firm_year(firm, year, &template)?;
    info!(
        firm = %firm,
        year = %year,
        path = %store.ledger_path(firm, year).display(),
        "firm/year seeded from template"
    );
    Ok(())
}
