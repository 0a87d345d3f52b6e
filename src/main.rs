//! Lifespan CLI
//!
//! Prints how many days a person has lived and how many remain until the
//! lifespan projected by a period life expectancy table.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use lifespan::cli;
use lifespan::report::{self, OutputFormat};
use lifespan::tables::embedded;
use lifespan::{
    BeyondTablePolicy, LifeExpectancyTable, PersonProfile, ProjectionConfig, ProjectionEngine,
    Sex,
};

/// Projected lifespan from birth date, sex and a life expectancy table
#[derive(Parser, Debug)]
#[command(name = "lifespan", version, about)]
struct Cli {
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = cli::parse_date)]
    birth: NaiveDate,

    /// Sex (one of 'f' or 'm')
    #[arg(long, value_parser = cli::parse_sex)]
    sex: Sex,

    /// Data year of the life expectancy table
    #[arg(long = "data-year", value_name = "YEAR", default_value_t = embedded::latest_year())]
    data_year: u16,

    /// Read the table from a file instead of the embedded data (labelled with --data-year)
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Reference date to project from [default: current local date]
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = cli::parse_date)]
    today: Option<NaiveDate>,

    /// Handling of ages past the end of the table
    #[arg(long = "beyond-table", value_enum, default_value_t = BeyondTablePolicy::Reject)]
    beyond_table: BeyondTablePolicy,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse_from(cli::normalize_flags(std::env::args_os()));
    cli::init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(err) => cli::exit_with_usage(&mut Cli::command(), err),
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let table = match &cli.table {
        Some(path) => LifeExpectancyTable::from_path(path, cli.data_year)
            .with_context(|| format!("failed to load table from {}", path.display()))?,
        None => LifeExpectancyTable::for_data_year(cli.data_year)?,
    };
    let engine = ProjectionEngine::new(
        table,
        ProjectionConfig {
            beyond_table: cli.beyond_table,
        },
    );

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let person = PersonProfile::new(cli.birth, cli.sex);
    let projection = engine.project(&person, today)?;

    Ok(report::render(&projection, cli.format)?)
}
