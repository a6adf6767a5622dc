//! Broken-down wall-clock time as delivered by the host tick service.

/// Hour and minute of the local wall clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

impl WallTime {
    /// Create a wall time, rejecting `hour > 23` and `minute > 59`.
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 { Some(Self { hour, minute }) } else { None }
    }

    /// Hour of day, 0-23.
    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    /// Minute of hour, 0-59.
    #[inline]
    pub const fn minute(self) -> u8 { self.minute }

    /// Shift by a signed number of minutes, wrapping around the day.
    pub const fn add_minutes(
        self,
        minutes: i32,
    ) -> Self {
        let total = (self.hour as i32 * 60 + self.minute as i32 + minutes).rem_euclid(24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }
}
