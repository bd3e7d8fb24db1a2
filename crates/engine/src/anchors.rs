//! Fixed tables and anchor arithmetic of the Doomsday rule.

use doomsday_calendar::{mod7, Weekday};

/// Doomsday month adjustments (index 0 unused, index 1 = January).
///
/// January's value assumes a common year; leap-year January and February
/// are handled by the separate -1 correction in the calculator.
const MONTH_ADJUSTMENTS: [u8; 13] = [0, 4, 0, 0, 3, 5, 1, 3, 6, 2, 4, 0, 2];

/// Returns the Doomsday adjustment for the given month.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12.
pub fn month_adjustment(month: u8) -> u8 {
    assert!(
        (1..=12).contains(&month),
        "month_adjustment: month must be 1..=12, got {month}"
    );
    MONTH_ADJUSTMENTS[month as usize]
}

/// Returns the anchor weekday offset for a century (`year div 100`).
///
/// Derived from the 400-year Gregorian cycle rather than a lookup table,
/// so it is correct for every century: anchors repeat with period 4 and
/// the 1600s anchor on Tuesday.
pub fn century_anchor(century: i32) -> u8 {
    mod7(5 * century.rem_euclid(4) as i64 + 2)
}

/// Returns the memorized doomsday for years with a dedicated fast-path
/// explanation (2003..=2010), or `None` for any other year.
pub fn known_year_anchor(year: i32) -> Option<Weekday> {
    let anchor = match year {
        2003 => Weekday::Friday,
        2004 => Weekday::Sunday,
        2005 => Weekday::Monday,
        2006 => Weekday::Tuesday,
        2007 => Weekday::Wednesday,
        2008 => Weekday::Friday,
        2009 => Weekday::Saturday,
        2010 => Weekday::Sunday,
        _ => return None,
    };
    Some(anchor)
}
