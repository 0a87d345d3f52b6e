//! Person data: sex and birth date

mod data;

pub use data::{PersonProfile, Sex, SexParseError};
