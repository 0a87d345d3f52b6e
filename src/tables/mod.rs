//! Period life expectancy tables
//!
//! Tables are published once per data year. Each one maps an integer age to
//! the additional years a person of that age and sex is expected to live.
//! The published years are compiled into the binary; a table can also be read
//! from disk in the same format.

mod expectancy;
pub mod embedded;
pub mod loader;

pub use expectancy::{BeyondTablePolicy, LifeExpectancyTable};
pub use loader::{load_embedded, load_from_path, parse_table};
