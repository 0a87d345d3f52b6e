//! Plain-text life expectancy table loader
//!
//! Reads rows of `age male female` separated by tabs or spaces. Lines starting
//! with `#` and blank lines are skipped; a `# source: ...` comment names where
//! the figures come from.

use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{embedded, LifeExpectancyTable};
use crate::error::TableError;

/// Parse a table from any reader
pub fn parse_table<R: Read>(mut reader: R, data_year: u16) -> Result<LifeExpectancyTable, TableError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let source = source_label(&text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows: BTreeMap<u32, (f64, f64)> = BTreeMap::new();

    for result in reader.records() {
        let record = result.map_err(|e| TableError::malformed(error_line(&e), e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();
        if fields.is_empty() {
            continue;
        }
        let [age, male, female] = fields.as_slice() else {
            return Err(TableError::malformed(
                line,
                format!("expected 3 fields (age, male, female), found {}", fields.len()),
            ));
        };

        let age: u32 = age
            .parse()
            .map_err(|e| TableError::malformed(line, format!("failed to parse age '{}': {}", age, e)))?;
        let male: f64 = male.parse().map_err(|e| {
            TableError::malformed(line, format!("failed to parse male life expectancy '{}': {}", male, e))
        })?;
        let female: f64 = female.parse().map_err(|e| {
            TableError::malformed(line, format!("failed to parse female life expectancy '{}': {}", female, e))
        })?;

        if rows.insert(age, (male, female)).is_some() {
            return Err(TableError::malformed(line, format!("duplicate entry for age {}", age)));
        }
    }

    // Ages must run from 0 without gaps
    let mut years = Vec::with_capacity(rows.len());
    for (expected, (age, values)) in rows.into_iter().enumerate() {
        if age != expected as u32 {
            return Err(TableError::MissingAge { age: expected as u32 });
        }
        years.push(values);
    }

    let mut table = LifeExpectancyTable::from_rows(data_year, years)?;
    if let Some(source) = source {
        table = table.with_source(source);
    }
    debug!(
        "Loaded {} life expectancy table with ages 0..={} from {}",
        data_year,
        table.max_age(),
        table.source()
    );
    Ok(table)
}

/// Text of the first `# source:` comment, if any
fn source_label(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| line.trim_start().strip_prefix('#'))
        .find_map(|comment| comment.trim_start().strip_prefix("source:"))
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
}

/// Load the embedded table for `year`
pub fn load_embedded(year: u16) -> Result<LifeExpectancyTable, TableError> {
    let text = embedded::source(year).ok_or_else(|| TableError::UnknownDataYear {
        year,
        available: embedded::available_years(),
    })?;
    parse_table(text.as_bytes(), year)
}

/// Load a table from a file on disk
pub fn load_from_path(path: &Path, data_year: u16) -> Result<LifeExpectancyTable, TableError> {
    debug!("Reading life expectancy table from {}", path.display());
    let file = File::open(path)?;
    parse_table(BufReader::new(file), data_year)
}

fn error_line(error: &csv::Error) -> u64 {
    error.position().map(|p| p.line()).unwrap_or(0)
}
