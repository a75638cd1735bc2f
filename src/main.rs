//! Premium Quoting CLI
//!
//! Quote one client against one product family, classify a health profile,
//! or search the medication reference list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use premium_quoting::underwriting::{classify_health_tier, search_medications};
use premium_quoting::{
    Catalog, ClientProfile, ProductFamily, QuoteEngine, QuoteLine, RatingTables, Sex,
};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFamily {
    Term,
    FinalExpense,
    Siul,
}

impl From<CliFamily> for ProductFamily {
    fn from(value: CliFamily) -> Self {
        match value {
            CliFamily::Term => ProductFamily::Term,
            CliFamily::FinalExpense => ProductFamily::FinalExpense,
            CliFamily::Siul => ProductFamily::Siul,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSex {
    Male,
    Female,
}

impl From<CliSex> for Sex {
    fn from(value: CliSex) -> Self {
        match value {
            CliSex::Male => Sex::Male,
            CliSex::Female => Sex::Female,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "premium_quoting", about = "Term, final expense and SIUL/IUL premium quotes")]
struct Cli {
    #[arg(long, global = true, help = "Directory of rating factor CSVs (defaults to built-in tables)")]
    tables: Option<PathBuf>,
    #[arg(long, global = true, help = "JSON catalog snapshot (defaults to built-in catalog)")]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate one client against a product family
    Quote {
        #[arg(long, value_enum)]
        family: CliFamily,
        #[arg(long)]
        age: u32,
        #[arg(long, value_enum)]
        sex: CliSex,
        #[arg(long)]
        smoker: bool,
        #[arg(long)]
        coverage: u64,
        #[arg(long, help = "Term length in years (Term only, default 20)")]
        term: Option<u32>,
        #[arg(long = "medication")]
        medications: Vec<String>,
        #[arg(long = "condition")]
        conditions: Vec<String>,
        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },
    /// Derive the health class for a set of medications and conditions
    Classify {
        #[arg(long = "medication")]
        medications: Vec<String>,
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },
    /// Search the medication reference list
    Medications {
        #[arg(default_value = "")]
        query: String,
        #[arg(long)]
        category: Option<String>,
    },
}

fn build_engine(cli: &Cli) -> Result<QuoteEngine> {
    let tables = match &cli.tables {
        Some(dir) => RatingTables::from_csv_path(dir)
            .with_context(|| format!("loading rating tables from {}", dir.display()))?,
        None => RatingTables::default_pricing(),
    };

    let catalog = match &cli.catalog {
        Some(file) => Catalog::from_json_path(file, &tables.term_length)
            .with_context(|| format!("loading catalog from {}", file.display()))?,
        None => {
            let catalog = Catalog::standard();
            catalog
                .validate(&tables.term_length)
                .context("built-in catalog does not match the rating tables")?;
            catalog
        }
    };

    Ok(QuoteEngine::new(catalog, tables))
}

fn print_lines(lines: &[QuoteLine]) {
    println!(
        "{:<4} {:<28} {:<52} {:>10} {:>11} {:>10}",
        "#", "Carrier", "Product", "Monthly", "Annual", "AD Rider"
    );
    for (idx, line) in lines.iter().enumerate() {
        let rider = line
            .rider_monthly
            .map(|m| format!("{:.2}", m))
            .unwrap_or_default();
        println!(
            "{:<4} {:<28} {:<52} {:>10.2} {:>11.2} {:>10}",
            idx + 1,
            line.carrier,
            line.product_name,
            line.monthly,
            line.annual,
            rider
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Quote {
            family,
            age,
            sex,
            smoker,
            coverage,
            term,
            medications,
            conditions,
            json,
        } => {
            let engine = build_engine(&cli)?;
            let family = ProductFamily::from(*family);

            let mut client = ClientProfile::new(0, family, *age, (*sex).into(), *smoker, *coverage);
            client.term = *term;
            client.medications = medications.clone();
            client.conditions = conditions.clone();

            let request = client.to_request();
            let lines = engine.rate(family, &request);

            if *json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&lines).context("serializing quotes")?
                );
                return Ok(());
            }

            println!("{} quotes", family);
            println!("=================\n");
            println!("  Age: {}  Sex: {}  Smoker: {}", request.age, request.sex.as_str(), request.smoker);
            println!("  Coverage: ${}", request.coverage);
            if family == ProductFamily::Term {
                println!("  Term: {} years", request.term_years());
            }
            println!("  Health class: {}", request.health_class.display_label());
            println!();

            if lines.is_empty() {
                println!("No products available for this profile.");
            } else {
                print_lines(&lines);
            }
        }
        Command::Classify {
            medications,
            conditions,
        } => {
            let tier = classify_health_tier(medications, conditions);
            let class = tier.to_health_class();
            println!("Tier:         {} ({})", tier.as_str(), tier.badge());
            println!("Health class: {}", class.display_label());
            println!("              {}", class.description());
        }
        Command::Medications { query, category } => {
            for med in search_medications(query, category.as_deref()) {
                println!("{:<24} {:<18} {}", med.name, med.category, med.impact.badge());
            }
        }
    }

    Ok(())
}
