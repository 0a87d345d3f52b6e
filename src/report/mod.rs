//! Human-readable and JSON rendering of a projection

mod format;
mod render;

pub use format::{format_days, iso_date, verbose_date, VERBOSE_DATE_FORMAT};
pub use render::{render, render_json, render_text, OutputFormat};
