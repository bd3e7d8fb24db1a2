//! Uniform random date generation over a configured year range.

use doomsday_calendar::{days_in_month, Date};
use rand::Rng;

use crate::error::EngineError;

/// Inclusive year range for random date generation.
///
/// Construction validates the bounds, so every `YearRange` value can be
/// sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Creates a new range from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::YearOutOfBounds`] if either bound is outside
    /// 1..=9999, or [`EngineError::StartAfterEnd`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, EngineError> {
        for year in [start, end] {
            if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
                return Err(EngineError::YearOutOfBounds { year });
            }
        }
        if start > end {
            return Err(EngineError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// First year of the range.
    pub fn start(self) -> i32 {
        self.start
    }

    /// Last year of the range.
    pub fn end(self) -> i32 {
        self.end
    }
}

impl Default for YearRange {
    /// The quiz's stock range, 1700..=2030.
    fn default() -> Self {
        Self {
            start: 1700,
            end: 2030,
        }
    }
}

/// Draws a date with year uniform over the range, month uniform over
/// 1..=12, and day uniform over the days of the drawn month (leap years
/// included). The caller supplies the randomness source.
pub fn random_date<R: Rng + ?Sized>(range: YearRange, rng: &mut R) -> Date {
    let year = rng.random_range(range.start..=range.end);
    let month = rng.random_range(1..=12u8);
    let max_day = days_in_month(year, month).expect("month 1..=12 is always valid");
    let day = rng.random_range(1..=max_day);
    Date::new(year, month, day).expect("generated components always form a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_valid() {
        let range = YearRange::new(1700, 2030).unwrap();
        assert_eq!(range.start(), 1700);
        assert_eq!(range.end(), 2030);
    }

    #[test]
    fn new_single_year() {
        assert!(YearRange::new(2024, 2024).is_ok());
    }

    #[test]
    fn new_start_after_end() {
        assert_eq!(
            YearRange::new(2000, 1999).unwrap_err(),
            EngineError::StartAfterEnd {
                start: 2000,
                end: 1999,
            }
        );
    }

    #[test]
    fn new_out_of_bounds() {
        assert_eq!(
            YearRange::new(0, 2000).unwrap_err(),
            EngineError::YearOutOfBounds { year: 0 }
        );
        assert_eq!(
            YearRange::new(2000, 10_000).unwrap_err(),
            EngineError::YearOutOfBounds { year: 10_000 }
        );
    }

    #[test]
    fn default_matches_quiz_stock_range() {
        let range = YearRange::default();
        assert_eq!(range.start(), 1700);
        assert_eq!(range.end(), 2030);
    }

    #[test]
    fn generated_dates_stay_in_range() {
        let range = YearRange::new(1990, 1995).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let date = random_date(range, &mut rng);
            assert!((1990..=1995).contains(&date.year()), "year out of range");
        }
    }

    #[test]
    fn single_year_range_generates_that_year() {
        let range = YearRange::new(2024, 2024).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(random_date(range, &mut rng).year(), 2024);
        }
    }

    #[test]
    fn every_month_eventually_drawn() {
        let range = YearRange::new(2024, 2024).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 13];
        for _ in 0..1000 {
            seen[random_date(range, &mut rng).month() as usize] = true;
        }
        assert!(seen[1..=12].iter().all(|&s| s), "some month never drawn");
    }
}
