//! Wall clock with a user-adjustable offset.

use chrono::{Local, Timelike};
use uncertainty_common::WallTime;

/// Local time shifted by a number of minutes, so the watchface can be scrubbed
/// through the day without waiting.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimClock {
    base: Option<WallTime>,
    offset_minutes: i32,
}

impl SimClock {
    pub const fn new() -> Self {
        Self {
            base: None,
            offset_minutes: 0,
        }
    }

    /// Clock that always starts from `base` instead of the system time.
    #[cfg(test)]
    pub const fn fixed(base: WallTime) -> Self {
        Self {
            base: Some(base),
            offset_minutes: 0,
        }
    }

    /// Current shifted local time.
    pub fn now(&self) -> WallTime {
        let base = self.base.unwrap_or_else(|| wall_time_from(&Local::now()));
        base.add_minutes(self.offset_minutes)
    }

    /// Move the clock forward (or backward for negative values).
    pub fn shift(
        &mut self,
        minutes: i32,
    ) {
        self.offset_minutes = (self.offset_minutes + minutes).rem_euclid(24 * 60);
    }

    #[inline]
    pub const fn offset_minutes(&self) -> i32 { self.offset_minutes }
}

/// Hour and minute of any chrono time value.
pub fn wall_time_from<T: Timelike>(t: &T) -> WallTime {
    // chrono guarantees hour < 24 and minute < 60
    WallTime::new(t.hour() as u8, t.minute() as u8).unwrap_or_default()
}
