//! Catalog CLI
//!
//! Resolves access decisions and builds citations from catalog JSON records.
//! Output is JSON on stdout; logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use catalog_core::domain::{AuthState, Item, Work};
use catalog_core::{citation_for_edition, display_citation, AccessResolver, CatalogConfig};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Access resolution and citation tools for catalog records")]
struct Cli {
    /// Configuration file (TOML, or JSON when the extension is .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decide the access affordance for an item
    #[command(arg_required_else_help = true)]
    Resolve {
        /// Item JSON file
        item: PathBuf,
        /// Address of the page the viewer is on
        #[arg(long)]
        page: String,
        /// Treat the viewer as logged in
        #[arg(long)]
        authenticated: bool,
    },
    /// Build the citation record for a work
    #[command(arg_required_else_help = true)]
    Cite {
        /// Work JSON file, editions included
        work: PathBuf,
        /// Edition id (defaults to the first edition)
        #[arg(long)]
        edition: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> catalog_core::Result<CatalogConfig> {
    let config = match path {
        None => CatalogConfig::default(),
        Some(path) => {
            let text = fs::read_to_string(path)?;
            if path.extension().is_some_and(|ext| ext == "json") {
                CatalogConfig::from_json(&text)?
            } else {
                CatalogConfig::from_toml(&text)?
            }
        }
    };
    config.validate()?;
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> catalog_core::Result<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn run(cli: Cli) -> catalog_core::Result<serde_json::Value> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve {
            item,
            page,
            authenticated,
        } => {
            let item: Item = read_json(&item)?;
            let resolver = AccessResolver::new(config.access.clone());
            let decision = resolver.resolve_item(&item, AuthState::from(authenticated), &page);
            let login_redirect = decision.login_redirect(resolver.config());
            Ok(json!({
                "decision": decision,
                "login_redirect": login_redirect,
            }))
        }
        Commands::Cite { work, edition } => {
            let work: Work = read_json(&work)?;
            let citation = citation_for_edition(&work, edition.as_deref())?;
            let cover = match edition.as_deref() {
                Some(id) => work.edition(id),
                None => work.editions.first(),
            }
            .and_then(|e| e.cover.as_deref());
            let display = display_citation(&citation, cover, &config.display)?;
            Ok(json!({
                "citation": citation,
                "display": display,
            }))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run(cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
