//! Lifespan - projected lifespan and remaining days from period life tables
//!
//! This library provides:
//! - Embedded life expectancy tables by data year, plus a loader for table files
//! - Calendar-stepped age calculation
//! - Death-date projection from additional life expectancy
//! - Text and JSON reports

pub mod cli;
pub mod error;
pub mod person;
pub mod projection;
pub mod report;
pub mod tables;

// Re-export commonly used types
pub use error::{Error, ExpectancyError, ProjectionError, Result, TableError};
pub use person::{PersonProfile, Sex};
pub use projection::{Projection, ProjectionConfig, ProjectionEngine};
pub use report::OutputFormat;
pub use tables::{BeyondTablePolicy, LifeExpectancyTable};
