//! Delay string parsing for one-shot scheduling.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ScheduleError;

static DELAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*(seconds?|sec|s|minutes?|min|m|hours?|hr|h|days?|d)$").unwrap()
});

/// Parse a human delay ("5 minutes", "2 hours", "1 day") into seconds.
pub fn parse_delay(text: &str) -> Result<u64, ScheduleError> {
    let lowered = text.trim().to_lowercase();
    let unrecognized = || ScheduleError::UnrecognizedDelayFormat(text.trim().to_string());

    let caps = DELAY.captures(&lowered).ok_or_else(unrecognized)?;
    let value: u64 = caps[1].parse().map_err(|_| unrecognized())?;

    let multiplier = match &caps[2][..1] {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        _ => 86400,
    };

    Ok(value.saturating_mul(multiplier))
}
