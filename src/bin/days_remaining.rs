//! Print the days remaining for an age and sex as a single integer
//!
//! Usage: days_remaining -age 42 -sex f

use clap::{CommandFactory, Parser};

use lifespan::cli;
use lifespan::tables::embedded;
use lifespan::{BeyondTablePolicy, LifeExpectancyTable, ProjectionConfig, ProjectionEngine, Sex};

/// Days of life remaining at an age, over 365-day years
#[derive(Parser, Debug)]
#[command(name = "days_remaining", version, about)]
struct Cli {
    /// Age in whole years
    #[arg(long)]
    age: u32,

    /// Sex (one of 'f' or 'm')
    #[arg(long, value_parser = cli::parse_sex)]
    sex: Sex,

    /// Data year of the life expectancy table
    #[arg(long = "data-year", value_name = "YEAR", default_value_t = embedded::latest_year())]
    data_year: u16,

    /// Handling of ages past the end of the table
    #[arg(long = "beyond-table", value_enum, default_value_t = BeyondTablePolicy::Reject)]
    beyond_table: BeyondTablePolicy,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse_from(cli::normalize_flags(std::env::args_os()));
    cli::init_logging(cli.verbose);

    match run(&cli) {
        Ok(days) => println!("{}", days),
        Err(err) => cli::exit_with_usage(&mut Cli::command(), err),
    }
}

fn run(cli: &Cli) -> anyhow::Result<u32> {
    let table = LifeExpectancyTable::for_data_year(cli.data_year)?;
    let engine = ProjectionEngine::new(
        table,
        ProjectionConfig {
            beyond_table: cli.beyond_table,
        },
    );
    Ok(engine.days_remaining_at_age(cli.age, cli.sex)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(cli::normalize_flags(args.iter().map(Into::into)))
    }

    #[test]
    fn test_days_for_age() {
        let cli = parse(&["days_remaining", "-age", "24", "-sex", "m"]).unwrap();
        assert_eq!(run(&cli).unwrap(), 18969);
    }

    #[test]
    fn test_negative_age_rejected() {
        assert!(parse(&["days_remaining", "-age", "-1", "-sex", "m"]).is_err());
    }

    #[test]
    fn test_age_past_table() {
        let cli = parse(&["days_remaining", "-age", "130", "-sex", "f"]).unwrap();
        assert!(run(&cli).is_err());

        let cli = parse(&["days_remaining", "-age", "130", "-sex", "f", "-beyond-table", "clamp"]).unwrap();
        assert!(run(&cli).unwrap() > 0);
    }
}
