//! Day-of-week resolution with a library-backed primary path and an
//! independent arithmetic fallback.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::date::Date;
use crate::weekday::Weekday;

/// Resolves the weekday for a date.
///
/// The primary path goes through [`chrono::NaiveDate`], whose constructor
/// re-validates the components independently of [`Date`]'s own checks. If
/// chrono rejects the date, Sakamoto's congruence takes over as a second,
/// library-free implementation. Returns `None` only when both paths fail;
/// callers must treat that as the "Unknown" sentinel, fatal for the current
/// question but never for the session.
pub fn resolve_weekday(date: Date) -> Option<Weekday> {
    match chrono_weekday(date) {
        Some(day) => Some(day),
        None => {
            warn!(%date, "primary weekday resolution failed, using fallback");
            sakamoto_weekday(date)
        }
    }
}

/// Primary path: proleptic Gregorian weekday via chrono.
fn chrono_weekday(date: Date) -> Option<Weekday> {
    let resolved = NaiveDate::from_ymd_opt(date.year(), date.month() as u32, date.day() as u32)?;
    // Guard against component normalization: the resolved date must
    // round-trip to the exact input.
    if resolved.year() != date.year()
        || resolved.month() != date.month() as u32
        || resolved.day() != date.day() as u32
    {
        return None;
    }
    Some(Weekday::from_offset(
        resolved.weekday().num_days_from_sunday() as i64,
    ))
}

/// Fallback path: Sakamoto's congruence, 0 = Sunday.
///
/// Re-validates its inputs rather than trusting the caller, so it stays a
/// fully independent implementation.
fn sakamoto_weekday(date: Date) -> Option<Weekday> {
    const T: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    if !(1..=12).contains(&date.month()) || date.day() == 0 || date.day() > 31 {
        return None;
    }
    let mut y = date.year() as i64;
    if date.month() < 3 {
        y -= 1;
    }
    let m = date.month() as usize;
    let d = date.day() as i64;
    let offset = y + y / 4 - y / 100 + y / 400 + T[m - 1] + d;
    Some(Weekday::from_offset(offset))
}
