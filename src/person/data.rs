//! Person data structures as accepted on the command line

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex used to select the table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Single-letter code accepted by the CLI
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }

    /// Word used in the narrative report
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sex must be exactly 'm' or 'f', got '{0}'")]
pub struct SexParseError(pub String);

impl FromStr for Sex {
    type Err = SexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Sex::Male, Sex::Female]
            .into_iter()
            .find(|sex| sex.code() == s)
            .ok_or_else(|| SexParseError(s.to_string()))
    }
}

/// Validated input for a single projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub birth_date: NaiveDate,
    pub sex: Sex,
}

impl PersonProfile {
    pub fn new(birth_date: NaiveDate, sex: Sex) -> Self {
        Self { birth_date, sex }
    }
}
