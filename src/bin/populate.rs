use std::process::ExitCode;

use clap::Parser;
use reqwest::blocking::Client;

use nutrition_ranking::{config::Config, db, error::IngestError, ingest, seasonal};

/// Downloads the nutrition dataset and rebuilds the `food` and `measures` tables.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Dataset location, overriding DATASET_URL
    #[arg(long)]
    url: Option<String>,

    /// Also report the produce listed on the SEASONAL_URL calendar page
    #[arg(long)]
    seasonal: bool,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match db::init_pool(&config.database_url, 1) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to open database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = Client::new();
    let url = args.url.as_deref().unwrap_or(&config.dataset_url);

    let result = pool
        .get()
        .map_err(IngestError::from)
        .and_then(|conn| ingest::run(&client, url, &conn));

    if let Err(e) = result {
        log::error!("Ingestion failed: {e}");
        return ExitCode::FAILURE;
    }

    if args.seasonal {
        let Some(seasonal_url) = &config.seasonal_url else {
            log::warn!("--seasonal given but SEASONAL_URL is not set");
            return ExitCode::SUCCESS;
        };

        match seasonal::fetch_seasonal_produce(&client, seasonal_url, &config.seasonal_selector) {
            Ok(Some(produce)) => log::info!("In season: {}", produce.join(", ")),
            Ok(None) => {}
            Err(e) => {
                log::error!("Seasonal calendar failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
