//! Command-line interface definitions for Daily Brief.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default, so a bare `daily_brief` run produces a full
//! briefing in each composition mode.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Daily Brief application.
///
/// # Examples
///
/// ```sh
/// # Default coordinates (Johannesburg), five headlines, every mode
/// daily_brief
///
/// # One mode, custom location
/// daily_brief --mode concurrent --latitude 52.52 --longitude 13.405
///
/// # Machine-readable output
/// daily_brief --mode race --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Latitude of the weather location in decimal degrees
    #[arg(long, default_value_t = -26.2041, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude of the weather location in decimal degrees
    #[arg(long, default_value_t = 28.0473, allow_hyphen_values = true)]
    pub longitude: f64,

    /// How many headlines to fetch
    #[arg(short, long, default_value_t = 5)]
    pub limit: usize,

    /// Which composition mode to run
    #[arg(short, long, value_enum, default_value = "all")]
    pub mode: Mode,

    /// Print each briefing as pretty JSON instead of the console rendering
    #[arg(long)]
    pub json: bool,
}

/// How the weather and news requests are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One request at a time, each step independent
    Sequential,
    /// Each request gated on the previous one succeeding
    Chained,
    /// Both requests at once, wait for both
    Concurrent,
    /// Both requests at once, keep whichever settles first
    Race,
    /// Run every mode in the order above
    All,
}

impl Mode {
    /// The concrete modes this selection runs.
    pub fn expand(self) -> Vec<Mode> {
        match self {
            Mode::All => vec![Mode::Sequential, Mode::Chained, Mode::Concurrent, Mode::Race],
            mode => vec![mode],
        }
    }
}
