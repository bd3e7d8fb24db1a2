//! The Doomsday calculation, retaining every intermediate quantity.

use doomsday_calendar::{is_leap_year, mod7, Date, Weekday};

use crate::anchors::{century_anchor, known_year_anchor, month_adjustment};
use crate::year_code::{year_code, YearCode};

/// Fast-path quantities for years with a memorized doomsday (2003..=2010).
///
/// Carries the memorized anchor and the running total of the simplified
/// formula `month + day_mod7 + anchor + leap`. The simplified total and the
/// general total agree modulo 7 for every date of those years, so the final
/// weekday never depends on which parameterization a reader follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownYear {
    anchor: Weekday,
    total: i32,
}

impl KnownYear {
    /// The memorized doomsday for the year.
    pub fn anchor(self) -> Weekday {
        self.anchor
    }

    /// Running total of the simplified formula.
    pub fn total(self) -> i32 {
        self.total
    }
}

/// Every operand and intermediate sum of one Doomsday computation, in the
/// order the mental algorithm produces them.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    date: Date,
    month_value: u8,
    day_mod7: u8,
    leap_adjustment: i8,
    century: i32,
    century_adjustment: u8,
    year_code: YearCode,
    total: i32,
    known: Option<KnownYear>,
    weekday: Weekday,
}

impl Calculation {
    /// The date the calculation was performed for.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The month adjustment from the fixed 12-entry table.
    pub fn month_value(&self) -> u8 {
        self.month_value
    }

    /// The day of the month reduced mod 7.
    pub fn day_mod7(&self) -> u8 {
        self.day_mod7
    }

    /// -1 for January/February of a leap year, otherwise 0.
    pub fn leap_adjustment(&self) -> i8 {
        self.leap_adjustment
    }

    /// The century index (`year div 100`).
    pub fn century(&self) -> i32 {
        self.century
    }

    /// The century's anchor offset.
    pub fn century_adjustment(&self) -> u8 {
        self.century_adjustment
    }

    /// The odd+11 reduction of the year, with its trace.
    pub fn year_code(&self) -> &YearCode {
        &self.year_code
    }

    /// Running total of the general formula
    /// `month + day_mod7 + century - year_code + leap`. May be negative.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Fast-path quantities, present exactly when the year is 2003..=2010.
    pub fn known(&self) -> Option<KnownYear> {
        self.known
    }

    /// The resulting weekday, `mod7` of the general running total.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// Computes the weekday of `date` by the Doomsday rule.
///
/// The arithmetic always follows the general parameterization; the
/// memorized-year quantities are computed alongside for years 2003..=2010
/// so the renderer can phrase the explanation in the simplified form.
pub fn calculate(date: Date) -> Calculation {
    let month_value = month_adjustment(date.month());
    let day_mod7 = mod7(date.day() as i64);
    let leap_adjustment = if is_leap_year(date.year()) && date.month() <= 2 {
        -1
    } else {
        0
    };

    let century = date.year().div_euclid(100);
    let century_adjustment = century_anchor(century);
    let year_code = year_code(date.year());

    let total = i32::from(month_value) + i32::from(day_mod7) + i32::from(century_adjustment)
        - i32::from(year_code.value())
        + i32::from(leap_adjustment);

    let known = known_year_anchor(date.year()).map(|anchor| KnownYear {
        anchor,
        total: i32::from(month_value)
            + i32::from(day_mod7)
            + i32::from(anchor.offset())
            + i32::from(leap_adjustment),
    });

    let weekday = Weekday::from_offset(total as i64);

    Calculation {
        date,
        month_value,
        day_mod7,
        leap_adjustment,
        century,
        century_adjustment,
        year_code,
        total,
        known,
        weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(year: i32, month: u8, day: u8) -> Calculation {
        calculate(Date::new(year, month, day).unwrap())
    }

    #[test]
    fn independence_day_1776() {
        let c = calc(1776, 7, 4);
        assert_eq!(c.month_value(), 3);
        assert_eq!(c.day_mod7(), 4);
        assert_eq!(c.century(), 17);
        assert_eq!(c.century_adjustment(), 0);
        assert_eq!(c.year_code().value(), 3);
        assert_eq!(c.leap_adjustment(), 0);
        assert_eq!(c.total(), 4);
        assert_eq!(c.weekday(), Weekday::Thursday);
        assert!(c.known().is_none());
    }

    #[test]
    fn new_year_2024_leap_correction() {
        let c = calc(2024, 1, 1);
        assert_eq!(c.month_value(), 4);
        assert_eq!(c.day_mod7(), 1);
        assert_eq!(c.century_adjustment(), 2);
        assert_eq!(c.year_code().value(), 5);
        assert_eq!(c.leap_adjustment(), -1);
        assert_eq!(c.total(), 1);
        assert_eq!(c.weekday(), Weekday::Monday);
    }

    #[test]
    fn leap_correction_only_in_january_and_february() {
        assert_eq!(calc(2024, 1, 15).leap_adjustment(), -1);
        assert_eq!(calc(2024, 2, 15).leap_adjustment(), -1);
        assert_eq!(calc(2024, 3, 15).leap_adjustment(), 0);
        assert_eq!(calc(2023, 1, 15).leap_adjustment(), 0);
        assert_eq!(calc(1900, 2, 15).leap_adjustment(), 0);
    }

    #[test]
    fn known_year_carries_fast_path() {
        let c = calc(2003, 7, 4);
        let known = c.known().expect("2003 is a memorized year");
        assert_eq!(known.anchor(), Weekday::Friday);
        // 3 (July) + 4 (day) + 5 (anchor) = 12
        assert_eq!(known.total(), 12);
        assert_eq!(c.weekday(), Weekday::Friday);
    }

    #[test]
    fn known_total_agrees_with_general_total() {
        let c = calc(2008, 2, 29);
        let known = c.known().unwrap();
        assert_eq!(mod7(known.total() as i64), mod7(c.total() as i64));
    }

    #[test]
    fn negative_total_still_resolves() {
        // February 7, 2107: 0 (month) + 0 (day) + 0 (century) - 6 (year) = -6.
        let c = calc(2107, 2, 7);
        assert_eq!(c.total(), -6);
        assert_eq!(c.weekday(), Weekday::Monday);
        assert_eq!(c.weekday().offset(), mod7(c.total() as i64));
    }

    #[test]
    fn day_under_seven_is_itself() {
        assert_eq!(calc(2024, 5, 6).day_mod7(), 6);
        assert_eq!(calc(2024, 5, 7).day_mod7(), 0);
        assert_eq!(calc(2024, 5, 31).day_mod7(), 3);
    }
}
