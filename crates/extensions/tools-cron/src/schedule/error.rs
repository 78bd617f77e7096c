//! Schedule parsing errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(
        "Could not parse '{0}' into a cron expression. Try a cron expression like '0 9 * * *' or natural language like 'daily at 9am'"
    )]
    UnrecognizedPhrase(String),

    #[error("Interval must be between {min} and {max}, got {value}")]
    IntervalOutOfRange { value: u32, min: u32, max: u32 },

    #[error("Invalid {field} field '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Could not parse delay '{0}'. Use a format like '5 minutes', '2 hours', '1 day'")]
    UnrecognizedDelayFormat(String),
}
