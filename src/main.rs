//! # Daily Brief
//!
//! A small console briefing tool that fetches the current weather and a set
//! of news headlines from two public JSON APIs and prints the result.
//!
//! ## Features
//!
//! - Current conditions from Open-Meteo for a coordinate pair
//! - Headlines (and one detail document) from the DummyJSON posts API
//! - Four composition modes over the same fetch primitive: sequential,
//!   chained, concurrent, and race
//! - Human-readable or JSON output
//!
//! ## Usage
//!
//! ```sh
//! daily_brief --mode concurrent --latitude 52.52 --longitude 13.405
//! ```
//!
//! ## Architecture
//!
//! Every request flows through one JSON fetcher:
//! 1. **Fetch**: HTTP GET, buffer the whole body, parse as JSON
//! 2. **Decode**: map the parsed value onto the API's typed shape
//! 3. **Assemble**: a composition-mode driver folds outcomes into a briefing
//! 4. **Render**: print the briefing to the console
//!
//! A failed request is logged and leaves its briefing section empty; it
//! never aborts the run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod briefing;
mod cli;
mod fetch;
mod models;
mod outputs;
mod sources;
mod utils;

use cli::{Cli, Mode};
use sources::Endpoints;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_brief starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(
        ?args.latitude,
        ?args.longitude,
        ?args.limit,
        ?args.mode,
        "Parsed CLI arguments"
    );

    let endpoints = Endpoints::default();

    for mode in args.mode.expand() {
        let briefing = match mode {
            Mode::Sequential => {
                briefing::sequential(&endpoints, args.latitude, args.longitude, args.limit).await
            }
            Mode::Chained => {
                briefing::chained(&endpoints, args.latitude, args.longitude, args.limit).await
            }
            Mode::Concurrent => {
                briefing::concurrent(&endpoints, args.latitude, args.longitude, args.limit).await
            }
            Mode::Race => {
                briefing::race(&endpoints, args.latitude, args.longitude, args.limit).await
            }
            Mode::All => unreachable!("expand() only yields concrete modes"),
        };

        info!(
            mode = %briefing.mode,
            headlines = briefing.headlines.len(),
            has_weather = briefing.weather.is_some(),
            "Briefing assembled"
        );

        if args.json {
            println!("{}", outputs::json::render(&briefing)?);
        } else {
            println!("{}", outputs::console::render(&briefing));
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
