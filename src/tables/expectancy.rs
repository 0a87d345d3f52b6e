//! Additional life expectancy by age and sex

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{embedded, loader};
use crate::error::{ExpectancyError, TableError};
use crate::person::Sex;

/// What to do when an age is past the last row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BeyondTablePolicy {
    /// Fail when the age is past the last row
    #[default]
    Reject,
    /// Use the value of the oldest age in the table
    Clamp,
}

/// Immutable period life expectancy table for one data year
#[derive(Debug, Clone, PartialEq)]
pub struct LifeExpectancyTable {
    /// Publication year of the source data
    data_year: u16,

    /// Where the figures come from, phrased to follow "the <year> release of"
    source: String,

    /// Additional years by age (index = age)
    /// Stored as (male, female)
    years: Vec<(f64, f64)>,
}

impl LifeExpectancyTable {
    pub const UNATTRIBUTED_SOURCE: &'static str = "an unattributed life expectancy table";

    /// Build a table from rows indexed by age.
    ///
    /// Every value must be finite and non-negative and at least one age must
    /// be present.
    pub fn from_rows(data_year: u16, years: Vec<(f64, f64)>) -> Result<Self, TableError> {
        if years.is_empty() {
            return Err(TableError::Empty);
        }
        for (age, &(male, female)) in years.iter().enumerate() {
            for value in [male, female] {
                if !value.is_finite() || value < 0.0 {
                    return Err(TableError::InvalidValue {
                        age: age as u32,
                        value,
                    });
                }
            }
        }
        Ok(Self {
            data_year,
            source: Self::UNATTRIBUTED_SOURCE.to_string(),
            years,
        })
    }

    /// Attach a description of where the figures come from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Embedded table for a data year
    pub fn for_data_year(year: u16) -> Result<Self, TableError> {
        loader::load_embedded(year)
    }

    /// Most recent embedded table
    pub fn latest() -> Result<Self, TableError> {
        loader::load_embedded(embedded::latest_year())
    }

    /// Load a table from a file, labelled with `data_year`
    pub fn from_path(path: &Path, data_year: u16) -> Result<Self, TableError> {
        loader::load_from_path(path, data_year)
    }

    pub fn data_year(&self) -> u16 {
        self.data_year
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Oldest age with an entry
    pub fn max_age(&self) -> u32 {
        (self.years.len() - 1) as u32
    }

    /// Additional years of life expected at exactly `age`
    pub fn lookup(&self, age: u32, sex: Sex) -> Result<f64, ExpectancyError> {
        let Some(&(male, female)) = self.years.get(age as usize) else {
            return Err(ExpectancyError::AgeOutOfRange {
                age,
                max_age: self.max_age(),
                sex,
            });
        };
        Ok(match sex {
            Sex::Male => male,
            Sex::Female => female,
        })
    }

    /// Lookup with an explicit policy for ages past the end of the table
    pub fn lookup_with(
        &self,
        age: u32,
        sex: Sex,
        policy: BeyondTablePolicy,
    ) -> Result<f64, ExpectancyError> {
        match (self.lookup(age, sex), policy) {
            (Err(ExpectancyError::AgeOutOfRange { max_age, .. }), BeyondTablePolicy::Clamp) => {
                warn!(
                    "age {} is past the {} table; using the age {} value",
                    age, self.data_year, max_age
                );
                self.lookup(max_age, sex)
            }
            (result, _) => result,
        }
    }
}
