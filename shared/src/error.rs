use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised at the boundary where raw input becomes calendar values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Input could not be parsed as a `YYYY-MM-DD` calendar date
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Month number outside 1-12, or a year chrono cannot represent
    #[error("invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    /// Lower bound lies after the upper bound
    #[error("selection range is inverted: {min} is after {max}")]
    InvertedRange { min: NaiveDate, max: NaiveDate },
}

/// Reasons a leave application is rejected before it is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveApplicationError {
    #[error(transparent)]
    Dates(#[from] DateError),

    /// Reason longer than the server accepts, counted in characters
    #[error("reason is {length} characters long; the limit is {max}")]
    ReasonTooLong { length: usize, max: usize },
}
