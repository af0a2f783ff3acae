use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::server::error::AppError;

/// List size used by the best customers page when none (or an invalid one) is given.
pub const DEFAULT_LIST_SIZE: u64 = 10;

/// Date-time layouts accepted for a reservation start, tried in order after RFC 3339.
///
/// The first entry is what a `datetime-local` input submits.
const START_AT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %I:%M %p",
];

/// Largest list size accepted; the database binds limits as signed 64-bit integers.
pub const MAX_LIST_SIZE: u64 = i64::MAX as u64;

/// Parses the requested size of a ranked customer list.
///
/// Missing, non-numeric, zero and out of range values fall back to
/// `DEFAULT_LIST_SIZE` instead of producing an error.
///
/// # Arguments
/// - `value` - Raw `size` query parameter, if present
///
/// # Returns
/// - `u64` - Positive list size
pub fn parse_list_size(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|size| (1..=MAX_LIST_SIZE).contains(size))
        .unwrap_or(DEFAULT_LIST_SIZE)
}

/// Parses a reservation start time submitted by the add-reservation form.
///
/// Accepts RFC 3339 timestamps (converted to UTC) and the local layouts listed in
/// `START_AT_FORMATS`. A bare date is taken as midnight.
///
/// # Arguments
/// - `value` - The submitted `startAt` field
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Parsed start time
/// - `Err(AppError::BadRequest)` - Value is not a recognised date-time
pub fn parse_start_at(value: &str) -> Result<NaiveDateTime, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    for format in START_AT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid start time: '{}'", value)))
}

/// Parses the number of guests for a reservation.
///
/// # Returns
/// - `Ok(i32)` - Guest count of at least 1
/// - `Err(AppError::BadRequest)` - Value is not an integer or is less than 1
pub fn parse_num_guests(value: &str) -> Result<i32, AppError> {
    let num_guests = value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid number of guests: '{}'", value)))?;

    if num_guests < 1 {
        return Err(AppError::BadRequest(
            "A reservation must have at least 1 guest".to_string(),
        ));
    }

    Ok(num_guests)
}
