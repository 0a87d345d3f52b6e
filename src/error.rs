//! Error types shared across the crate

use thiserror::Error;

use crate::person::Sex;

/// Failures while building a life expectancy table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("no embedded life expectancy table for data year {year} (available: {available:?})")]
    UnknownDataYear { year: u16, available: Vec<u16> },

    #[error("failed to read life expectancy table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed life expectancy table at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("invalid life expectancy {value} for age {age}")]
    InvalidValue { age: u32, value: f64 },

    #[error("life expectancy table has no entry for age {age}")]
    MissingAge { age: u32 },

    #[error("life expectancy table has no rows")]
    Empty,
}

impl TableError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        TableError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Failures looking up a single expectancy value
#[derive(Debug, Error, PartialEq)]
pub enum ExpectancyError {
    #[error("age {age} is beyond the table maximum of {max_age} for {sex}s")]
    AgeOutOfRange { age: u32, max_age: u32, sex: Sex },
}

/// Failures while projecting a death date
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error(transparent)]
    Expectancy(#[from] ExpectancyError),

    #[error("projected date falls outside the supported calendar range")]
    DateOutOfRange,
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Expectancy(#[from] ExpectancyError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
