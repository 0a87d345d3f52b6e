//! Report rendering

use serde::{Deserialize, Serialize};

use super::format::{format_days, iso_date, verbose_date};
use crate::projection::Projection;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Narrative paragraph followed by the Event / Date / Age table
    #[default]
    Text,
    /// The projection as a JSON document
    Json,
}

/// Render a projection in the requested format
pub fn render(projection: &Projection, format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(projection)),
        OutputFormat::Json => render_json(projection),
    }
}

/// Narrative summary and event table
pub fn render_text(p: &Projection) -> String {
    let lived = format_days(p.age_in_days);
    let remaining = format_days(p.days_remaining);

    let mut out = format!(
        "Given that you have lived {} days, a lifespan of {:.2} years since your birth on {}, \
         and based on the {} release of {} for {}s, \
         you have {} days remaining until reaching your projected lifespan of {:.2} years on {}.\n\n",
        lived,
        p.years_since_birth,
        verbose_date(p.birth_date),
        p.data_year,
        p.table_source,
        p.sex,
        remaining,
        p.projected_lifespan_years,
        verbose_date(p.projected_death_date),
    );
    out.push_str("Event  Date         Age\n");
    out.push_str(&"-".repeat(42));
    out.push('\n');
    out.push_str(&format!("Birth: {}  0.00 ({} days ago)\n", iso_date(p.birth_date), lived));
    out.push_str(&format!("Today: {} {:<5.2}\n", iso_date(p.reference_date), p.years_since_birth));
    out.push_str(&format!(
        "Death: {} {:<5.2} ({} days left)\n",
        iso_date(p.projected_death_date),
        p.projected_lifespan_years,
        remaining,
    ));
    out
}

/// Pretty-printed JSON document
pub fn render_json(p: &Projection) -> crate::Result<String> {
    let mut json = serde_json::to_string_pretty(p)?;
    json.push('\n');
    Ok(json)
}
