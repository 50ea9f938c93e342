//! Parsing of raw request values.
//!
//! Query parameters arrive as strings. These helpers turn them into typed values and report
//! the offending parameter as a 400 Bad Request when a value does not parse or a required
//! text is blank.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::server::error::AppError;

/// Splits a comma separated list, trimming entries and dropping blank ones.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Parses every entry of a comma separated list as `T`.
///
/// # Arguments
/// - `field` - Query parameter name, used in the error message
/// - `raw` - Raw parameter value, if present
///
/// # Returns
/// - `Ok(Vec<T>)` - Parsed entries; empty when the parameter is absent or blank
/// - `Err(AppError::BadRequest)` - An entry does not parse
pub fn parse_list<T: FromStr>(field: &str, raw: Option<&str>) -> Result<Vec<T>, AppError> {
    split_list(raw)
        .into_iter()
        .map(|entry| {
            entry
                .parse::<T>()
                .map_err(|_| AppError::BadRequest(format!("invalid {}: {}", field, entry)))
        })
        .collect()
}

/// Parses an optional scalar parameter. Blank values count as absent.
pub fn parse_scalar<T: FromStr>(field: &str, raw: Option<&str>) -> Result<Option<T>, AppError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("invalid {}: {}", field, value))),
        None => Ok(None),
    }
}

/// Parses an optional RFC 3339 timestamp and converts it to UTC.
pub fn parse_datetime(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| {
                AppError::BadRequest(format!("invalid {}: {} (expected RFC 3339)", field, value))
            }),
        None => Ok(None),
    }
}

/// Trims a required free text value such as a comment body.
///
/// # Returns
/// - `Ok(String)` - The trimmed text
/// - `Err(AppError::BadRequest)` - The text is empty or only whitespace
pub fn required_text(field: &str, raw: &str) -> Result<String, AppError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(value.to_string())
}
