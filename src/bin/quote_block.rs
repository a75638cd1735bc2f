//! Quote a block of clients from a CSV file
//!
//! Writes one row per client with the cheapest eligible product, or blank
//! product columns when nothing is eligible.

use anyhow::{Context, Result};
use clap::Parser;
use premium_quoting::client::{load_clients, loader::DEFAULT_CLIENTS_PATH};
use premium_quoting::quoting::BatchQuote;
use premium_quoting::QuoteEngine;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "quote_block", about = "Batch-quote a CSV of client profiles")]
struct Args {
    #[arg(long, default_value = DEFAULT_CLIENTS_PATH)]
    input: PathBuf,
    #[arg(long, default_value = "quote_block_output.csv")]
    output: PathBuf,
    #[arg(long, help = "Directory of rating factor CSVs (defaults to built-in tables)")]
    tables: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "ClientID")]
    client_id: u32,
    #[serde(rename = "Family")]
    family: &'static str,
    #[serde(rename = "Eligible")]
    eligible: usize,
    #[serde(rename = "Carrier")]
    carrier: &'a str,
    #[serde(rename = "Product")]
    product: &'a str,
    #[serde(rename = "Monthly")]
    monthly: Option<f64>,
    #[serde(rename = "Annual")]
    annual: Option<f64>,
}

impl<'a> From<&'a BatchQuote> for OutputRow<'a> {
    fn from(quote: &'a BatchQuote) -> Self {
        let best = quote.best();
        OutputRow {
            client_id: quote.client_id,
            family: quote.family.lead_code(),
            eligible: quote.lines.len(),
            carrier: best.map_or("", |l| l.carrier.as_str()),
            product: best.map_or("", |l| l.product_name.as_str()),
            monthly: best.map(|l| l.monthly),
            annual: best.map(|l| l.annual),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let engine = match &args.tables {
        Some(dir) => QuoteEngine::from_csv_path(dir)
            .with_context(|| format!("loading rating tables from {}", dir.display()))?,
        None => QuoteEngine::standard(),
    };

    let start = Instant::now();
    println!("Loading clients from {}...", args.input.display());
    let clients = load_clients(&args.input)
        .with_context(|| format!("loading clients from {}", args.input.display()))?;
    println!("Loaded {} clients in {:?}", clients.len(), start.elapsed());

    let quote_start = Instant::now();
    let results = engine.quote_batch(&clients);
    println!("Quoting complete in {:?}", quote_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for result in &results {
        writer.serialize(OutputRow::from(result))?;
    }
    writer.flush()?;

    let unquoted = results.iter().filter(|r| r.lines.is_empty()).count();
    println!("Results written to {}", args.output.display());
    println!("  Clients quoted: {}", results.len() - unquoted);
    println!("  No eligible product: {}", unquoted);

    Ok(())
}
