use std::time::{SystemTime, UNIX_EPOCH};

use crate::date::civil_from_epoch_day;

const SECONDS_PER_DAY: u64 = 86_400;

/// Source of the current date.
///
/// Returns the raw `(year, month, day)` triple; callers validate it.
pub trait Clock {
    fn now(&self) -> (i64, i64, i64);
}

/// Clock reading the system time, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> (i64, i64, i64) {
        let epoch_day = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY).unwrap_or(i64::MAX),
            Err(before) => {
                let days = before.duration().as_secs().div_ceil(SECONDS_PER_DAY);
                i64::try_from(days).map_or(i64::MIN, |days| -days)
            },
        };
        let (year, month, day) = civil_from_epoch_day(epoch_day.clamp(crate::MIN_EPOCH_DAY, crate::MAX_EPOCH_DAY));
        (year, i64::from(month), i64::from(day))
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year:  i64,
    month: i64,
    day:   i64,
}

impl FixedClock {
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> (i64, i64, i64) {
        (self.year, self.month, self.day)
    }
}
