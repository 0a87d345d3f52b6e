//! Helpers shared by the command-line binaries

use chrono::NaiveDate;
use env_logger::Env;
use std::ffi::OsString;

use crate::person::Sex;

/// Rewrite single-dash long flags (`-birth`) to the double-dash form
///
/// Short flags (`-h`, `-v`, `-vv`), values such as negative numbers, and
/// anything after a bare `--` are left untouched.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest)
                    if !rest.starts_with('-')
                        && rest.len() > 1
                        && rest.starts_with(|c: char| c.is_ascii_alphabetic())
                        && !rest.chars().all(|c| c == 'v') =>
                {
                    OsString::from(format!("-{}", text))
                }
                _ => arg,
            }
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date as YYYY-MM-DD, got '{}': {}", s, e))
}

/// Parse `m` or `f`
pub fn parse_sex(s: &str) -> Result<Sex, String> {
    s.parse::<Sex>().map_err(|e| e.to_string())
}

/// Initialise env_logger; `RUST_LOG` applies unless `-v` flags raise the level
pub fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.format_target(false).init();
}

/// Report a fatal error with the command's usage and exit non-zero
pub fn exit_with_usage(command: &mut clap::Command, err: anyhow::Error) -> ! {
    eprintln!("error: {:#}\n", err);
    eprintln!("{}", command.render_help());
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_flags(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_long_flags() {
        assert_eq!(
            normalize(&["lifespan", "-birth", "2000-01-01", "-sex", "m", "-data-year=2023"]),
            vec!["lifespan", "--birth", "2000-01-01", "--sex", "m", "--data-year=2023"]
        );
    }

    #[test]
    fn test_short_and_double_dash_untouched() {
        assert_eq!(
            normalize(&["lifespan", "-v", "-vv", "-h", "--sex", "f", "-age", "-5"]),
            vec!["lifespan", "-v", "-vv", "-h", "--sex", "f", "--age", "-5"]
        );
        assert_eq!(normalize(&["-birth", "--", "-sex"]), vec!["-birth", "--", "-sex"]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2000-02-29"), Ok(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()));
        assert!(parse_date("2001-02-29").is_err());
        assert!(parse_date("01/02/2000").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!(parse_sex("f"), Ok(Sex::Female));
        assert!(parse_sex("female").is_err());
    }
}
