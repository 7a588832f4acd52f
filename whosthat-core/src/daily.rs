//! Deterministic daily puzzle selection.

use chrono::{DateTime, Utc};

use crate::config::GenerationLimit;

/// Length of one puzzle day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Days since the Unix epoch, UTC.
pub fn day_index(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis().div_euclid(MILLIS_PER_DAY)
}

/// The id every player gets on the UTC day containing `now`.
///
/// Result is in `[1, limit]`, constant across the day, and shifts at
/// UTC midnight.
pub fn daily_id(now: DateTime<Utc>, limit: GenerationLimit) -> u32 {
    let modulus = i64::from(limit.get().max(1));
    let index = day_index(now).rem_euclid(modulus);
    // index < modulus <= u32::MAX
    u32::try_from(index).unwrap_or(0) + 1
}
