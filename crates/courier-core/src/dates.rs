//! Day offsets formatted for the delivery API.

use std::fmt::Write;

use chrono::{Days, Local, NaiveDate};

use crate::error::{Error, Result};

/// Date format the server expects in query strings
pub const SERVER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default offset: one week back
pub const DEFAULT_DAY_OFFSET: i64 = -7;

/// Move `base` by `days` (negative goes back).
pub fn offset_date(base: NaiveDate, days: i64) -> Result<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        base.checked_add_days(magnitude)
    } else {
        base.checked_sub_days(magnitude)
    };
    shifted.ok_or_else(|| Error::InvalidInput(format!("date offset of {days} days overflows")))
}

/// Today's local date shifted by `days`, formatted with `format`.
pub fn date_from_today(days: i64, format: &str) -> Result<String> {
    let today = Local::now().date_naive();
    format_date(offset_date(today, days)?, format)
}

/// Format `date`, rejecting `strftime` strings chrono can't render.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    let mut formatted = String::new();
    write!(formatted, "{}", date.format(format))
        .map_err(|_| Error::InvalidInput(format!("invalid date format: {format:?}")))?;
    Ok(formatted)
}
