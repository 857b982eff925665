//! interline CLI
//!
//! Converts a partner feed file into the downstream connecting-flight JSON.

use std::path::PathBuf;

use clap::Parser;
use interline_core::IntegrationConfig;
use interline_feed::{convert_feed, convert_feed_strict, read_feed};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "interline", version, about = "Normalize recheck and interline flags of a partner feed")]
struct Cli {
    /// Partner feed XML file
    feed: PathBuf,

    /// Partner integration config (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Partner reports the recheck flag one leg late
    #[arg(long)]
    recheck_baggage_after: bool,

    /// Partner reports the virtual-interline flag one leg late
    #[arg(long)]
    virtual_interline_after: bool,

    /// Fail on switch combinations with no defined behavior
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => IntegrationConfig::from_path(path)?,
        None => IntegrationConfig::default(),
    };
    config.recheck_baggage_after |= cli.recheck_baggage_after;
    config.virtual_interline_after |= cli.virtual_interline_after;

    let shift = config.shift_config();
    info!(partner = ?config.partner, mode = ?shift.mode(), "converting {}", cli.feed.display());

    let xml = read_feed(&cli.feed)?;
    let response = if cli.strict {
        convert_feed_strict(&xml, shift)?
    } else {
        convert_feed(&xml, shift)?
    };

    let json = if cli.pretty {
        response.to_json_pretty()?
    } else {
        response.to_json()?
    };
    println!("{json}");

    Ok(())
}
