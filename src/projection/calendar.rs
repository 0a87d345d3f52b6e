//! Calendar arithmetic for ages and projected dates
//!
//! Ages are counted the way stepping one calendar unit at a time from the
//! birth date would count them: a unit is counted for every step that is still
//! strictly before the reference date. The functions here use chrono's native
//! differences and agree with that stepping, including across leap years.
//!
//! A year step that would land on a missing Feb 29 rolls forward to Mar 1.
//! Age counting steps from the previous anniversary, so once a Feb 29 birth
//! has rolled to Mar 1 every later anniversary stays on Mar 1.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::ProjectionError;

/// Fixed year length used to turn fractional years into days (leap years ignored)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// `date` advanced by whole calendar years, `None` past the chrono range
///
/// Feb 29 in a common year becomes Mar 1.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    match NaiveDate::from_ymd_opt(year, date.month(), date.day()) {
        Some(shifted) => Some(shifted),
        None if date.month() == 2 && date.day() == 29 => NaiveDate::from_ymd_opt(year, 3, 1),
        None => None,
    }
}

/// Date reached from `birth` after `n` one-year steps
///
/// Each step starts from the previous result, so a Feb 29 birth is on Mar 1
/// for every `n >= 1`, leap years included.
fn anniversary(birth: NaiveDate, n: u32) -> Option<NaiveDate> {
    if n > 0 && birth.month() == 2 && birth.day() == 29 {
        let year = birth.year().checked_add(i32::try_from(n).ok()?)?;
        return NaiveDate::from_ymd_opt(year, 3, 1);
    }
    add_years(birth, n)
}

/// Whole days from `from` to `target`, zero when `target` is not after `from`
pub fn days_until(from: NaiveDate, target: NaiveDate) -> u32 {
    let days = target.signed_duration_since(from).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Days stepped from `birth` while before `today`
pub fn age_in_days(birth: NaiveDate, today: NaiveDate) -> u32 {
    days_until(birth, today)
}

/// Calendar years stepped from `birth` while before `today`
///
/// Counts every `n >= 0` whose `n`-th one-year step from `birth` is still
/// before `today`. On the anniversary itself this equals the completed years;
/// on any other day it is one more than the completed years.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> u32 {
    if birth >= today {
        return 0;
    }

    // Step n + 1 is already in a later calendar year than today
    let mut n = (today.year() - birth.year()) as u32;
    while n > 0 && anniversary(birth, n).map_or(true, |date| date >= today) {
        n -= 1;
    }
    n + 1
}

/// Absolute elapsed time between the dates in 365-day years
pub fn years_since_birth(birth: NaiveDate, today: NaiveDate) -> f64 {
    today.signed_duration_since(birth).num_days().abs() as f64 / DAYS_PER_YEAR
}

/// Projected death date for a person aged `age` with `expectancy` years left
///
/// The expectancy is split into whole years and a remainder of
/// `trunc(365 * fraction)` days. The birth date is advanced by `age` years,
/// then by the whole years, then by the remainder days. Changing that order
/// changes results across leap days.
pub fn projected_death_date(
    expectancy: f64,
    birth: NaiveDate,
    age: u32,
) -> Result<NaiveDate, ProjectionError> {
    if !expectancy.is_finite() || expectancy < 0.0 {
        return Err(ProjectionError::DateOutOfRange);
    }
    let whole_years = expectancy.trunc();
    let remainder_days = (DAYS_PER_YEAR * (expectancy - whole_years)) as u64;

    add_years(birth, age)
        .and_then(|date| add_years(date, whole_years as u32))
        .and_then(|date| date.checked_add_days(Days::new(remainder_days)))
        .ok_or(ProjectionError::DateOutOfRange)
}
