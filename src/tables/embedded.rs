//! Life expectancy tables compiled into the binary.
//!
//! One plain-text table per data year, rows of `age male female`.

/// 2022 release.
pub const TABLE_2022: &str = include_str!("../../data/life_expectancy/2022.txt");

/// 2023 release.
pub const TABLE_2023: &str = include_str!("../../data/life_expectancy/2023.txt");

/// 2024 release.
pub const TABLE_2024: &str = include_str!("../../data/life_expectancy/2024.txt");

/// Embedded tables in ascending data-year order
const TABLES: &[(u16, &str)] = &[
    (2022, TABLE_2022),
    (2023, TABLE_2023),
    (2024, TABLE_2024),
];

/// Raw text of the table for `year`, if one is embedded
pub fn source(year: u16) -> Option<&'static str> {
    TABLES
        .iter()
        .find(|(table_year, _)| *table_year == year)
        .map(|(_, text)| *text)
}

/// Data years with an embedded table, ascending
pub fn available_years() -> Vec<u16> {
    TABLES.iter().map(|(year, _)| *year).collect()
}

/// Most recent embedded data year
pub fn latest_year() -> u16 {
    TABLES[TABLES.len() - 1].0
}
