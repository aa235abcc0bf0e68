//! Display formatting for event dates and times (en-US).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, Time};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid date `{0}`")]
    InvalidDate(String),
    #[error("invalid time `{0}`")]
    InvalidTime(String),
    #[error("failed to render value: {0}")]
    Render(#[from] time::error::Format),
}

/// `2024-03-15` (optionally followed by a time part) → `March 15, 2024`.
pub fn format_date(iso: &str) -> Result<String, FormatError> {
    let date = parse_date(iso)?;
    Ok(date.format(format_description!("[month repr:long] [day padding:none], [year]"))?)
}

/// `14:30` or `14:30:59` → `2:30 PM`.
pub fn format_time(hh_mm: &str) -> Result<String, FormatError> {
    let time = parse_time(hh_mm)?;
    Ok(time.format(format_description!("[hour repr:12 padding:none]:[minute] [period]"))?)
}

/// Parse the calendar date at the start of an ISO date or datetime string.
pub fn parse_date(iso: &str) -> Result<Date, FormatError> {
    let trimmed = iso.trim();
    let date_part = match trimmed.get(..10) {
        Some(prefix) if trimmed.len() == 10 || trimmed[10..].starts_with(['T', ' ']) => prefix,
        _ => return Err(FormatError::InvalidDate(iso.to_owned())),
    };
    Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .map_err(|_| FormatError::InvalidDate(iso.to_owned()))
}

/// Parse `H:MM`, `HH:MM`, or `HH:MM:SS`.
pub fn parse_time(hh_mm: &str) -> Result<Time, FormatError> {
    let invalid = || FormatError::InvalidTime(hh_mm.to_owned());
    let mut parts = hh_mm.trim().split(':');
    let hour = parse_component(parts.next()).ok_or_else(invalid)?;
    let minute = parse_component(parts.next()).ok_or_else(invalid)?;
    let second = match parts.next() {
        Some(raw) => parse_component(Some(raw)).ok_or_else(invalid)?,
        None => 0,
    };
    if parts.next().is_some() {
        return Err(invalid());
    }
    Time::from_hms(hour, minute, second).map_err(|_| invalid())
}

fn parse_component(raw: Option<&str>) -> Option<u8> {
    let raw = raw?;
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
