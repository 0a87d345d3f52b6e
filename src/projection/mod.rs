//! Lifespan projection from a birth date and a life expectancy table

pub mod calendar;
mod engine;
mod result;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use result::Projection;
