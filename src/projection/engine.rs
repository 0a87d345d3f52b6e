//! Projection engine: table lookup plus calendar arithmetic

use chrono::NaiveDate;
use log::debug;

use super::calendar::{self, DAYS_PER_YEAR};
use super::Projection;
use crate::error::ProjectionError;
use crate::person::{PersonProfile, Sex};
use crate::tables::{BeyondTablePolicy, LifeExpectancyTable};

/// Configuration for projections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Handling of ages past the last table row
    pub beyond_table: BeyondTablePolicy,
}

/// Projects lifespans against one immutable table
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    table: LifeExpectancyTable,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(table: LifeExpectancyTable, config: ProjectionConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &LifeExpectancyTable {
        &self.table
    }

    /// Table value for `age`, honouring the configured beyond-table policy
    pub fn expectancy(&self, age: u32, sex: Sex) -> Result<f64, ProjectionError> {
        Ok(self.table.lookup_with(age, sex, self.config.beyond_table)?)
    }

    /// Project a person's lifespan as of `today`
    pub fn project(
        &self,
        person: &PersonProfile,
        today: NaiveDate,
    ) -> Result<Projection, ProjectionError> {
        let birth = person.birth_date;

        let age_in_days = calendar::age_in_days(birth, today);
        let age_in_years = calendar::age_in_years(birth, today);
        let expectancy = self.expectancy(age_in_years, person.sex)?;
        debug!(
            "Age {} years ({} days) as of {}; {} {} expectancy {}",
            age_in_years,
            age_in_days,
            today,
            self.table.data_year(),
            person.sex,
            expectancy
        );

        let projected_death_date = calendar::projected_death_date(expectancy, birth, age_in_years)?;
        let days_remaining = calendar::days_until(today, projected_death_date);
        debug!(
            "Projected death date {} ({} days remaining)",
            projected_death_date, days_remaining
        );

        Ok(Projection {
            birth_date: birth,
            reference_date: today,
            sex: person.sex,
            data_year: self.table.data_year(),
            table_source: self.table.source().to_string(),
            age_in_days,
            age_in_years,
            years_since_birth: calendar::years_since_birth(birth, today),
            additional_expectancy_years: expectancy,
            projected_lifespan_years: age_in_years as f64 + expectancy,
            projected_death_date,
            days_remaining,
        })
    }

    /// Remaining days for an age alone, over fixed 365-day years
    pub fn days_remaining_at_age(&self, age: u32, sex: Sex) -> Result<u32, ProjectionError> {
        let expectancy = self.expectancy(age, sex)?;
        Ok((expectancy * DAYS_PER_YEAR) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpectancyError;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_2024(policy: BeyondTablePolicy) -> ProjectionEngine {
        let table = LifeExpectancyTable::for_data_year(2024).unwrap();
        ProjectionEngine::new(table, ProjectionConfig { beyond_table: policy })
    }

    #[test]
    fn test_project_male_2000() {
        let engine = engine_2024(BeyondTablePolicy::Reject);
        let person = PersonProfile::new(date(2000, 1, 1), Sex::Male);
        let projection = engine.project(&person, date(2024, 1, 1)).unwrap();

        assert_eq!(projection.age_in_years, 24);
        assert_eq!(projection.age_in_days, 8766);
        assert_eq!(projection.additional_expectancy_years, 51.97);
        assert_relative_eq!(projection.projected_lifespan_years, 75.97, epsilon = 1e-9);
        assert_eq!(projection.projected_death_date, date(2075, 12, 21));
        assert_eq!(projection.days_remaining, 18982);
        assert_eq!(projection.data_year, 2024);
        assert!(!projection.is_past_projection());
    }

    #[test]
    fn test_projection_carries_table_source() {
        let engine = engine_2024(BeyondTablePolicy::Reject);
        let person = PersonProfile::new(date(2000, 1, 1), Sex::Female);
        let projection = engine.project(&person, date(2024, 1, 1)).unwrap();
        assert_eq!(projection.table_source, engine.table().source());
        assert!(projection.table_source.contains("illustrative"));
    }

    #[test]
    fn test_leap_day_birth_projects_from_march_first() {
        let table = LifeExpectancyTable::from_rows(2024, vec![(3.0, 3.0), (3.0, 3.0)]).unwrap();
        let engine = ProjectionEngine::new(table, ProjectionConfig::default());
        let person = PersonProfile::new(date(2004, 2, 29), Sex::Male);

        let projection = engine.project(&person, date(2005, 3, 1)).unwrap();
        assert_eq!(projection.age_in_years, 1);
        assert_eq!(projection.projected_death_date, date(2008, 3, 1));
    }

    #[test]
    fn test_projection_matches_formula() {
        let engine = engine_2024(BeyondTablePolicy::Reject);
        let birth = date(1985, 8, 17);
        let person = PersonProfile::new(birth, Sex::Female);
        let today = date(2024, 10, 19);
        let projection = engine.project(&person, today).unwrap();

        let expectancy = engine.table().lookup(projection.age_in_years, Sex::Female).unwrap();
        let whole = expectancy.trunc() as u32;
        let days = (365.0 * expectancy.fract()) as u64;
        let expected = calendar::add_years(birth, projection.age_in_years + whole)
            .unwrap()
            .checked_add_days(chrono::Days::new(days))
            .unwrap();
        assert_eq!(projection.projected_death_date, expected);
        assert_eq!(
            projection.days_remaining,
            calendar::days_until(today, projection.projected_death_date)
        );
    }

    #[test]
    fn test_past_projection_has_zero_days_remaining() {
        let table = LifeExpectancyTable::from_rows(2024, vec![(0.5, 0.5), (0.0, 0.0)]).unwrap();
        let engine = ProjectionEngine::new(table, ProjectionConfig::default());
        let person = PersonProfile::new(date(2023, 1, 1), Sex::Male);
        let projection = engine.project(&person, date(2024, 1, 1)).unwrap();
        assert_eq!(projection.projected_death_date, date(2024, 1, 1));
        assert_eq!(projection.days_remaining, 0);
        assert!(projection.is_past_projection());
    }

    #[test]
    fn test_age_beyond_table_is_rejected() {
        let engine = engine_2024(BeyondTablePolicy::Reject);
        let person = PersonProfile::new(date(1890, 1, 1), Sex::Female);
        let err = engine.project(&person, date(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::Expectancy(ExpectancyError::AgeOutOfRange {
                age: 134,
                max_age: 119,
                sex: Sex::Female
            })
        );
    }

    #[test]
    fn test_age_beyond_table_clamps_when_configured() {
        let engine = engine_2024(BeyondTablePolicy::Clamp);
        let person = PersonProfile::new(date(1890, 1, 1), Sex::Female);
        let projection = engine.project(&person, date(2024, 1, 1)).unwrap();
        let oldest = engine.table().lookup(119, Sex::Female).unwrap();
        assert_eq!(projection.additional_expectancy_years, oldest);
        assert!(projection.additional_expectancy_years > 0.0);
    }

    #[test]
    fn test_future_birth_projects_from_birth() {
        let engine = engine_2024(BeyondTablePolicy::Reject);
        let person = PersonProfile::new(date(2030, 1, 1), Sex::Male);
        let projection = engine.project(&person, date(2024, 1, 1)).unwrap();
        assert_eq!(projection.age_in_days, 0);
        assert_eq!(projection.age_in_years, 0);
        assert_eq!(
            projection.additional_expectancy_years,
            engine.table().lookup(0, Sex::Male).unwrap()
        );
        assert!(projection.projected_death_date > date(2100, 1, 1));
    }

    #[test]
    fn test_days_remaining_at_age() {
        let engine = engine_2024(BeyondTablePolicy::Reject);
        // trunc(51.97 * 365) = trunc(18969.05)
        assert_eq!(engine.days_remaining_at_age(24, Sex::Male), Ok(18969));
        assert!(engine.days_remaining_at_age(120, Sex::Male).is_err());
    }
}
