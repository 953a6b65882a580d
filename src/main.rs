mod analyzer;
mod config;
mod fetcher;
mod model;
mod parser;
mod report;
mod utils;

use analyzer::analyze;
use clap::Parser;
use config::load_config;
use fetcher::{PriceFetcher, PriceGraphFetcher};
use model::{AnalysisResult, AppError, PriceQuery};
use parser::parse_route;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use utils::parse_date;

/// Flight Price Tracker: analyze flight prices for a given route.
#[derive(Debug, Parser)]
#[command(version, about, after_help = "Example: flight-sniper --route KBP-WAW")]
struct Cli {
    /// Route to analyze as ORIGIN-DESTINATION using 3-letter IATA codes (e.g. KBP-WAW)
    #[arg(long)]
    route: String,

    /// Departure date as YYYY-MM-DD, defaults to today
    #[arg(long)]
    date: Option<String>,

    /// JSON config file; environment variables override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr, stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli).await {
        debug!("{:?}", e);
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let route = parse_route(&cli.route)?;
    let query = match cli.date.as_deref() {
        Some(date) => PriceQuery::new(route, parse_date(date)?),
        None => PriceQuery::today(route),
    };

    let config = load_config(cli.config.as_deref())?;
    let fetcher = PriceGraphFetcher::new(&config).map_err(|source| AppError::Fetch {
        route: query.route.clone(),
        source,
    })?;

    let result = process_route(&fetcher, &query).await?;
    print!("{}", report::render(&query.route, query.departure_date, &result));
    Ok(())
}

/// Fetches prices for a single route and runs the analysis over them.
async fn process_route(
    fetcher: &impl PriceFetcher,
    query: &PriceQuery,
) -> Result<AnalysisResult, AppError> {
    let prices = fetcher
        .fetch(query)
        .await
        .map_err(|source| AppError::Fetch {
            route: query.route.clone(),
            source,
        })?;

    let result = analyze(&prices)?;
    info!(
        "Analysis for {}: {} prices, {} anomalies",
        query.route,
        result.count,
        result.anomalies.len()
    );
    Ok(result)
}
