//! Canonical 5-field cron expressions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::error::ScheduleError;
use super::field::{CronField, FieldKind};
use super::next::Upcoming;

/// A parsed, validated 5-field cron expression.
///
/// Fields are minute, hour, day-of-month, month, and day-of-week
/// (0 = Sunday). Construction is validation: a value of this type always
/// denotes a well-formed schedule.
#[derive(Debug, Clone)]
pub struct CronExpression {
    pub(crate) minute: CronField,
    pub(crate) hour: CronField,
    pub(crate) day_of_month: CronField,
    pub(crate) month: CronField,
    pub(crate) day_of_week: CronField,
    source: String,
}

impl CronExpression {
    /// Iterate over the fire times strictly after `from`.
    pub fn upcoming(&self, from: DateTime<Utc>) -> Upcoming<'_> {
        Upcoming::new(self, from)
    }

    /// The canonical five-field text of this expression.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for CronExpression {
    type Err = ScheduleError;

    /// Parse a raw cron string: exactly five whitespace-separated fields,
    /// each within the value range of its position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(ScheduleError::InvalidField {
                field: "expression",
                value: s.trim().to_string(),
                reason: format!("expected 5 fields, got {}", fields.len()),
            });
        }

        Ok(Self {
            minute: CronField::parse(FieldKind::Minute, fields[0])?,
            hour: CronField::parse(FieldKind::Hour, fields[1])?,
            day_of_month: CronField::parse(FieldKind::DayOfMonth, fields[2])?,
            month: CronField::parse(FieldKind::Month, fields[3])?,
            day_of_week: CronField::parse(FieldKind::DayOfWeek, fields[4])?,
            source: fields.join(" "),
        })
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Expressions compare by field values, not by spelling.
impl PartialEq for CronExpression {
    fn eq(&self, other: &Self) -> bool {
        self.minute == other.minute
            && self.hour == other.hour
            && self.day_of_month == other.day_of_month
            && self.month == other.month
            && self.day_of_week == other.day_of_week
    }
}

impl Eq for CronExpression {}
