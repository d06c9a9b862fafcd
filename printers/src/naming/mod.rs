//! Monthly listing file names.
//!
//! The printer scan writes one listing per month into a `foundprinters`
//! directory, named `printers_YYYY-MM.csv`. The month is taken from a base
//! date moved back by an offset in days, so a scan running early in a month
//! can still file under the month before.

use std::path::PathBuf;

use chrono::{Duration, NaiveDate};

use crate::error::{ConfigError, ConfigResult};

/// Directory the listings live in, relative to the site root.
pub const FOUNDPRINTERS_DIR: &str = "foundprinters";

/// Prefix of every listing file name.
pub const FILE_PREFIX: &str = "printers_";

/// Extension of every listing file name.
pub const FILE_EXTENSION: &str = "csv";

/// File name for the month containing `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use printer_table::monthly_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
/// assert_eq!(monthly_file_name(date), "printers_2024-05.csv");
/// ```
pub fn monthly_file_name(date: NaiveDate) -> String {
    format!("{}{}.{}", FILE_PREFIX, date.format("%Y-%m"), FILE_EXTENSION)
}

/// Base date moved back by `offset_days`.
///
/// A negative offset moves forward.
pub fn listing_date(base: NaiveDate, offset_days: i64) -> ConfigResult<NaiveDate> {
    let delta = Duration::try_days(offset_days).ok_or(ConfigError::OffsetOutOfRange(offset_days))?;
    base.checked_sub_signed(delta)
        .ok_or(ConfigError::OffsetOutOfRange(offset_days))
}

/// Parse a `MM-YYYY` month override into the first day of that month.
pub fn parse_month(value: &str) -> ConfigResult<NaiveDate> {
    let invalid = || ConfigError::InvalidMonth(value.to_string());

    let (month, year) = value.trim().split_once('-').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 4 {
        return Err(invalid());
    }
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Parse a day offset as given in configuration.
pub fn parse_offset(value: &str) -> ConfigResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidOffset(value.to_string()))
}

/// Path of the listing file for a scan run on `today`.
///
/// `month` (`MM-YYYY`) replaces `today` with the first day of that month;
/// the day offset (default `0`) is then subtracted before naming.
pub fn listing_path(
    dir: &str,
    month: Option<&str>,
    offset_days: Option<&str>,
    today: NaiveDate,
) -> ConfigResult<PathBuf> {
    let base = match month {
        Some(m) => parse_month(m)?,
        None => today,
    };
    let offset = match offset_days {
        Some(o) => parse_offset(o)?,
        None => 0,
    };
    let date = listing_date(base, offset)?;
    Ok(PathBuf::from(dir).join(monthly_file_name(date)))
}

/// Root-relative request path for a listing in `dir`.
pub fn resource_path(dir: &str, file_name: &str) -> String {
    format!("/{}/{}", dir.trim_matches('/'), file_name)
}
