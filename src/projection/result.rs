//! Output of a single projection

use chrono::NaiveDate;
use serde::Serialize;

use crate::person::Sex;

/// Everything derived for one person on one reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub birth_date: NaiveDate,
    pub reference_date: NaiveDate,
    pub sex: Sex,
    /// Publication year of the table used
    pub data_year: u16,
    /// Where the table figures come from
    pub table_source: String,

    /// Days stepped from birth while still before the reference date
    pub age_in_days: u32,
    /// Calendar years stepped from birth while still before the reference date
    pub age_in_years: u32,
    /// Elapsed days over a 365-day year
    pub years_since_birth: f64,

    /// Table value at `age_in_years`
    pub additional_expectancy_years: f64,
    /// `age_in_years + additional_expectancy_years`
    pub projected_lifespan_years: f64,
    pub projected_death_date: NaiveDate,
    pub days_remaining: u32,
}

impl Projection {
    /// True once the reference date has reached the projected death date
    pub fn is_past_projection(&self) -> bool {
        self.days_remaining == 0
    }
}
