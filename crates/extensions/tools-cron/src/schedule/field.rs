//! Cron field grammar and matching.

use super::error::ScheduleError;

/// Position of a field within a 5-field cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }

    /// Inclusive value range for this position. Day-of-week is 0-6 with
    /// 0 = Sunday.
    fn range(self) -> (u32, u32) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 6),
        }
    }
}

/// One comma-separated entry of a cron field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldPart {
    All,
    Value(u32),
    Range(u32, u32),
    Step { start: u32, end: u32, step: u32 },
}

/// A parsed cron field: the comma-list of entries for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CronField {
    parts: Vec<FieldPart>,
}

impl CronField {
    /// Parse one whitespace-delimited field of a cron expression,
    /// validating value ranges and step semantics for its position.
    pub(crate) fn parse(kind: FieldKind, text: &str) -> Result<Self, ScheduleError> {
        let invalid = |reason: String| ScheduleError::InvalidField {
            field: kind.name(),
            value: text.to_string(),
            reason,
        };

        if text.is_empty() {
            return Err(invalid("field is empty".to_string()));
        }

        let mut parts = Vec::new();
        for entry in text.split(',') {
            parts.push(Self::parse_entry(kind, entry).map_err(&invalid)?);
        }

        Ok(Self { parts })
    }

    fn parse_entry(kind: FieldKind, entry: &str) -> Result<FieldPart, String> {
        if entry == "*" {
            return Ok(FieldPart::All);
        }

        let (min, max) = kind.range();
        let number = |s: &str| -> Result<u32, String> {
            s.parse()
                .map_err(|_| format!("'{s}' is not a number"))
        };
        let bounded = |start: u32, end: u32| -> Result<(u32, u32), String> {
            if start > end {
                return Err("range start is greater than range end".to_string());
            }
            if start < min || end > max {
                return Err(format!("allowed values are {min}-{max}"));
            }
            Ok((start, end))
        };

        if let Some((base, step)) = entry.split_once('/') {
            let step = number(step)?;
            if step == 0 {
                return Err("step must be greater than zero".to_string());
            }
            let (start, end) = if base == "*" {
                (min, max)
            } else if let Some((a, b)) = base.split_once('-') {
                (number(a)?, number(b)?)
            } else {
                return Err("step requires '*' or a range".to_string());
            };
            let (start, end) = bounded(start, end)?;
            return Ok(FieldPart::Step { start, end, step });
        }

        if let Some((a, b)) = entry.split_once('-') {
            let (start, end) = bounded(number(a)?, number(b)?)?;
            return Ok(FieldPart::Range(start, end));
        }

        let value = number(entry)?;
        let (value, _) = bounded(value, value)?;
        Ok(FieldPart::Value(value))
    }

    /// Whether `value` satisfies this field.
    pub(crate) fn matches(&self, value: u32) -> bool {
        self.parts.iter().any(|part| match *part {
            FieldPart::All => true,
            FieldPart::Value(v) => v == value,
            FieldPart::Range(start, end) => (start..=end).contains(&value),
            FieldPart::Step { start, end, step } => {
                (start..=end).contains(&value) && (value - start) % step == 0
            }
        })
    }

    /// True when the field is a lone `*`. Day-of-month and day-of-week
    /// combine differently depending on which of them is unrestricted.
    pub(crate) fn is_wildcard(&self) -> bool {
        self.parts == [FieldPart::All]
    }
}
