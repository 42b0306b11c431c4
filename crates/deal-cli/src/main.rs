//! `deals` CLI — query a restaurant feed snapshot for active deals and the
//! peak deal window.
//!
//! ## Usage
//!
//! ```sh
//! # Deals active at 3pm (feed on stdin → JSON on stdout)
//! curl -s https://example.com/challengedata.json | deals active --time 3:00pm
//!
//! # Read the feed from a file, second page of 10
//! deals --feed restaurants.json active --time 15:00 --page 1 --size 10
//!
//! # Window with the most deals available at once
//! deals --feed restaurants.json --pretty peak
//!
//! # Show skipped records and the computed peak on stderr
//! deals --feed restaurants.json --log-level debug peak
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deal_engine::{DealPage, PageRequest, Restaurant};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "deals",
    version,
    about = "Query active restaurant deals and the peak deal window"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Restaurant feed JSON file (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    feed: Option<String>,

    /// Log level for diagnostics on stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List deals active at a time of day
    Active {
        /// Time of day, e.g. "3:00pm", "3:00 PM", "15:00"
        #[arg(short, long)]
        time: String,
        /// Zero-based page number
        #[arg(long)]
        page: Option<usize>,
        /// Deals per page
        #[arg(long)]
        size: Option<usize>,
    },
    /// Find the time window with the most deals available at once
    Peak,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level)
        .env()
        .init()
        .context("Failed to install logger")?;

    let restaurants = load_feed(cli.feed.as_deref())?;
    info!("Loaded {} restaurants", restaurants.len());

    match cli.command {
        Commands::Active { time, page, size } => {
            let deals = deal_engine::query_active_deals(&time, &restaurants)
                .context("Failed to query active deals")?;
            let result = match (page, size) {
                (None, None) => DealPage::unpaged(deals),
                (page, size) => {
                    let defaults = PageRequest::default();
                    let request = PageRequest {
                        page: page.unwrap_or(defaults.page),
                        size: size.unwrap_or(defaults.size),
                    };
                    deal_engine::paginate(deals, request).context("Failed to paginate deals")?
                }
            };
            write_json(&result, cli.pretty)?;
        }
        Commands::Peak => {
            let peak = deal_engine::query_peak_window(&restaurants);
            write_json(&peak, cli.pretty)?;
        }
    }

    Ok(())
}

fn load_feed(path: Option<&str>) -> Result<Vec<Restaurant>> {
    let json = read_input(path)?;
    let source = path.unwrap_or("stdin");
    deal_engine::parse_feed(&json)
        .with_context(|| format!("Failed to read restaurant feed from {}", source))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
