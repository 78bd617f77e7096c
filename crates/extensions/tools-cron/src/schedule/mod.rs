//! Schedule engine: natural-language and cron parsing plus occurrence
//! computation.
//!
//! The phrase tables are compiled once into process-wide read-only
//! statics; every operation here is a pure function, safe to call from
//! any number of threads without coordination.

mod delay;
mod error;
mod expression;
mod field;
mod next;
mod parse;

pub use delay::parse_delay;
pub use error::ScheduleError;
pub use expression::CronExpression;
pub use next::{Upcoming, format_timestamp};
pub use parse::parse;
