//! Next-occurrence computation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use super::expression::CronExpression;

/// How far past the starting point to search before concluding a
/// schedule never fires (e.g. `0 0 31 2 *`).
const SEARCH_HORIZON_DAYS: i64 = 5 * 366;

/// Render a fire time the way schedule tools report it.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Iterator over the fire times of a cron expression, strictly after the
/// starting instant, at minute granularity with seconds zeroed.
///
/// Advances field-wise: when the month, day, or hour of a candidate
/// cannot match, the whole unit is skipped, so sparse schedules do not
/// walk minute by minute through the calendar.
pub struct Upcoming<'a> {
    expr: &'a CronExpression,
    cursor: NaiveDateTime,
    horizon: NaiveDateTime,
}

impl<'a> Upcoming<'a> {
    pub(crate) fn new(expr: &'a CronExpression, from: DateTime<Utc>) -> Self {
        let naive = from.naive_utc();
        let cursor = naive
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(naive);
        Self {
            expr,
            cursor,
            horizon: cursor + Duration::days(SEARCH_HORIZON_DAYS),
        }
    }
}

impl Iterator for Upcoming<'_> {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        let mut t = self.cursor + Duration::minutes(1);

        loop {
            if t > self.horizon {
                return None;
            }

            if !self.expr.month.matches(t.month()) {
                t = first_of_next_month(t.date())?.and_time(NaiveTime::MIN);
                continue;
            }
            if !day_matches(self.expr, t.date()) {
                t = t.date().succ_opt()?.and_time(NaiveTime::MIN);
                continue;
            }
            if !self.expr.hour.matches(t.hour()) {
                t = t.with_minute(0)? + Duration::hours(1);
                continue;
            }
            if !self.expr.minute.matches(t.minute()) {
                t += Duration::minutes(1);
                continue;
            }

            self.cursor = t;
            return Some(t.and_utc());
        }
    }
}

/// Day-of-month and day-of-week combine with standard cron semantics:
/// when both are restricted a day matches if either field accepts it;
/// when one is `*` the other alone governs.
fn day_matches(expr: &CronExpression, date: NaiveDate) -> bool {
    let dom = expr.day_of_month.matches(date.day());
    let dow = expr
        .day_of_week
        .matches(date.weekday().num_days_from_sunday());

    match (
        expr.day_of_month.is_wildcard(),
        expr.day_of_week.is_wildcard(),
    ) {
        (true, true) => true,
        (false, true) => dom,
        (true, false) => dow,
        (false, false) => dom || dow,
    }
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

#[cfg(test)]
#[path = "next_tests.rs"]
mod tests;
