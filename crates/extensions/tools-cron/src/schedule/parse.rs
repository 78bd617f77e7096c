//! Natural-language schedule parsing.
//!
//! Translates free-text phrases ("daily at 9am", "every 5 minutes") into
//! canonical cron expressions. Raw cron input passes through unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::error::ScheduleError;
use super::expression::CronExpression;

const DAY_NAMES: &str = "sunday|monday|tuesday|wednesday|thursday|friday|saturday";
const TIME: &str = r"(\d{1,2}):?(\d{2})?\s*(am|pm)?";

static EVERY_N_MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^every (\d+) minutes?$").unwrap());
static EVERY_N_HOURS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^every (\d+) hours?$").unwrap());
static EVERY_N_DAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^every (\d+) days?$").unwrap());
static WEEKDAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:every )?({DAY_NAMES})s?$")).unwrap());
static WEEKDAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^weekdays?$").unwrap());
static WEEKENDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^weekends?$").unwrap());
static AT_NOON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:daily|every day) )?at noon$").unwrap());
static AT_MIDNIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:daily|every day) )?at midnight$").unwrap());
static WEEKDAY_AT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:every )?({DAY_NAMES})s? at {TIME}$")).unwrap());
static DAILY_AT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:daily|every day) at {TIME}$")).unwrap());
static AT_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^at {TIME}$")).unwrap());

/// Parse a natural-language phrase or raw cron string into a canonical
/// cron expression.
///
/// Raw cron input takes priority: if the whole string is a valid 5-field
/// expression it is returned unchanged, even when the text would also
/// match a phrase pattern. A cron-shaped string with out-of-range values
/// is not reported as bad cron; it falls through to phrase matching like
/// any other text.
pub fn parse(input: &str) -> Result<CronExpression, ScheduleError> {
    let trimmed = input.trim();

    if let Ok(expr) = trimmed.parse::<CronExpression>() {
        return Ok(expr);
    }

    match phrase_to_cron(&trimmed.to_lowercase()) {
        Ok(cron) => cron.parse(),
        // Report the input as the caller wrote it, not lower-cased.
        Err(ScheduleError::UnrecognizedPhrase(_)) => {
            Err(ScheduleError::UnrecognizedPhrase(trimmed.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// Ordered phrase table. The first matching rule wins; rule order makes
/// the patterns mutually exclusive (intervals before weekday forms
/// before time-of-day forms).
fn phrase_to_cron(text: &str) -> Result<String, ScheduleError> {
    match text {
        "hourly" | "every hour" => return Ok("0 * * * *".to_string()),
        "daily" | "every day" => return Ok("0 0 * * *".to_string()),
        "weekly" | "every week" => return Ok("0 0 * * 0".to_string()),
        "monthly" | "every month" => return Ok("0 0 1 * *".to_string()),
        _ => {}
    }

    if let Some(caps) = EVERY_N_MINUTES.captures(text) {
        let n = interval(&caps, 1, 59)?;
        return Ok(format!("*/{n} * * * *"));
    }
    if let Some(caps) = EVERY_N_HOURS.captures(text) {
        let n = interval(&caps, 1, 23)?;
        return Ok(format!("0 */{n} * * *"));
    }
    if let Some(caps) = EVERY_N_DAYS.captures(text) {
        let n = interval(&caps, 1, 31)?;
        return Ok(format!("0 0 */{n} * *"));
    }
    if let Some(caps) = WEEKDAY.captures(text) {
        return Ok(format!("0 0 * * {}", day_number(&caps[1])));
    }
    if WEEKDAYS.is_match(text) {
        return Ok("0 0 * * 1-5".to_string());
    }
    if WEEKENDS.is_match(text) {
        return Ok("0 0 * * 0,6".to_string());
    }
    if AT_NOON.is_match(text) {
        return Ok("0 12 * * *".to_string());
    }
    if AT_MIDNIGHT.is_match(text) {
        return Ok("0 0 * * *".to_string());
    }
    if let Some(caps) = WEEKDAY_AT_TIME.captures(text) {
        let day = day_number(&caps[1]);
        let (hour, minute) = time_of_day(&caps, 2);
        return Ok(format!("{minute} {hour} * * {day}"));
    }
    if let Some(caps) = DAILY_AT_TIME.captures(text) {
        let (hour, minute) = time_of_day(&caps, 1);
        return Ok(format!("{minute} {hour} * * *"));
    }
    if let Some(caps) = AT_TIME.captures(text) {
        let (hour, minute) = time_of_day(&caps, 1);
        return Ok(format!("{minute} {hour} * * *"));
    }

    Err(ScheduleError::UnrecognizedPhrase(text.to_string()))
}

fn interval(caps: &Captures<'_>, min: u32, max: u32) -> Result<u32, ScheduleError> {
    let value: u32 = caps[1].parse().unwrap_or(u32::MAX);
    if value < min || value > max {
        return Err(ScheduleError::IntervalOutOfRange { value, min, max });
    }
    Ok(value)
}

/// Day name to cron day-of-week number, 0 = Sunday.
fn day_number(name: &str) -> u32 {
    match name {
        "monday" => 1,
        "tuesday" => 2,
        "wednesday" => 3,
        "thursday" => 4,
        "friday" => 5,
        "saturday" => 6,
        _ => 0,
    }
}

/// Extract (hour, minute) from the time capture groups starting at
/// `base`. The hour is taken literally in 24-hour form unless a meridian
/// suffix is present; "pm" adds 12 unless the hour is already 12, and
/// "am" maps 12 to 0. A missing minute group defaults to 0.
fn time_of_day(caps: &Captures<'_>, base: usize) -> (u32, u32) {
    let mut hour: u32 = caps[base].parse().unwrap_or(0);
    let minute: u32 = caps
        .get(base + 1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    match caps.get(base + 2).map(|m| m.as_str()) {
        Some("pm") if hour != 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    (hour, minute)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
