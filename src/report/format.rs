//! Number and date formatting for reports

use chrono::NaiveDate;

/// `Monday, January 2 of 2006`
pub const VERBOSE_DATE_FORMAT: &str = "%A, %B %-d of %Y";

/// Day count with comma thousands separators
pub fn format_days(days: u32) -> String {
    let digits = days.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn verbose_date(date: NaiveDate) -> String {
    date.format(VERBOSE_DATE_FORMAT).to_string()
}

/// `YYYY-MM-DD`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
