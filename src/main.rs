mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use businessdays::{
    holidays_for_year,
    inauguration_day_for_year,
    Configuration,
    FederalHoliday,
    Holiday
};

use crate::cli::{Cli, Command, CountArgs, HolidaysArgs, YearArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Configuration::default(),
    };
    debug!(?configuration, "using configuration");

    match cli.command {
        Command::Count(args) => count(&configuration, args),
        Command::Holidays(args) => holidays(&configuration, args),
        Command::Inauguration(args) => inauguration(args),
    }
}

fn count(configuration: &Configuration, args: CountArgs) -> Result<()> {
    let business_days = configuration
        .count_business_days(&args.start, &args.end)
        .with_context(|| format!("counting business days from {} to {}", args.start, args.end))?;
    println!("{business_days}");
    Ok(())
}

fn holidays(configuration: &Configuration, args: HolidaysArgs) -> Result<()> {
    let mut holidays = holidays_for_year(args.year)?;
    if configuration.include_inauguration_day() {
        if let Some(date) = inauguration_day_for_year(args.year)? {
            holidays.push(Holiday::new(FederalHoliday::InaugurationDay, date));
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        for holiday in &holidays {
            println!("{}  {}", holiday.date(), holiday.name());
        }
    }
    Ok(())
}

fn inauguration(args: YearArgs) -> Result<()> {
    match inauguration_day_for_year(args.year)? {
        Some(date) => println!("{date}"),
        None => println!("none"),
    }
    Ok(())
}
