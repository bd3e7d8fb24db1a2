//! Error types for the doomsday_calendar crate.

/// Error type for all fallible operations in the doomsday_calendar crate.
///
/// This enum covers validation failures for years, month numbers, and
/// day-within-month values in the proleptic Gregorian calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month belongs to (February's length depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let err = CalendarError::InvalidYear { year: 0 };
        assert_eq!(err.to_string(), "invalid year: 0 (must be 1..=9999)");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 2023,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of 2023 (max 28)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InvalidYear { year: 10_000 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
