use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// U.S. federal holidays and business-day counts.
#[derive(Parser)]
#[command(
    name = "businessdays",
    version,
    about = "U.S. federal holidays and business-day counts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Count business days between two dates, both included.
    Count(CountArgs),
    /// List the federal holidays observed for a year.
    Holidays(HolidaysArgs),
    /// Print the observed Inauguration Day of a year, if any.
    Inauguration(YearArgs),
}

/// Arguments for the `count` subcommand.
#[derive(clap::Args)]
pub struct CountArgs {
    /// First date, YYYY-MM-DD.
    pub start: String,

    /// Last date, YYYY-MM-DD.
    pub end: String,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Calendar year.
    pub year: i32,

    /// Print the list as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inauguration` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Calendar year.
    pub year: i32,
}
