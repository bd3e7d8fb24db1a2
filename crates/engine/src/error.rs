//! Error types for the doomsday_engine crate.

use doomsday_calendar::Date;

/// Error type for rejected generator configurations.
///
/// The engine's computations themselves are total over valid [`Date`]
/// values; only the year-range configuration can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Returned when the start of a year range lies after its end.
    #[error("invalid year range: start {start} is after end {end}")]
    StartAfterEnd {
        /// The start year that was provided.
        start: i32,
        /// The end year that was provided.
        end: i32,
    },

    /// Returned when a range bound lies outside the supported years.
    #[error("invalid year range bound: {year} (must be {}..={})", Date::MIN_YEAR, Date::MAX_YEAR)]
    YearOutOfBounds {
        /// The offending bound.
        year: i32,
    },
}
