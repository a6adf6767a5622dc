//! Hour text formatting and update suppression.
//!
//! The watchface only shows the hour as text; minutes are conveyed by the
//! segment. Because segment 0 already covers the last minutes of an hour
//! (57..=59), the text rounds up to the next hour at the same moment so both
//! read as "about the full hour".
//!
//! [`HourTextUpdater`] remembers the last displayed hour and skips formatting
//! when it has not changed, so the host only re-renders the text layer once
//! per hour.

use heapless::String;

use crate::config::ROUND_UP_MINUTE;
use crate::time::WallTime;

/// Characters in the hour text.
pub const HOUR_TEXT_LEN: usize = 2;

/// Zero-padded two-digit hour.
pub type HourText = String<HOUR_TEXT_LEN>;

/// Hour to display for `now`, rounded up during the last minutes of the hour.
pub const fn display_hour(now: WallTime) -> u8 {
    if now.minute() >= ROUND_UP_MINUTE { (now.hour() + 1) % 24 } else { now.hour() }
}

/// Convert a 0-23 hour to the clock convention (`%H` or `%I`).
pub const fn clock_hour(
    hour: u8,
    is_24h: bool,
) -> u8 {
    if is_24h {
        return hour;
    }
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Format a 0-23 hour as a zero-padded two-digit string.
pub fn format_hour(
    hour: u8,
    is_24h: bool,
) -> HourText {
    let h = clock_hour(hour, is_24h) % 100;
    let mut text = HourText::new();
    text.push(char::from(b'0' + h / 10)).ok();
    text.push(char::from(b'0' + h % 10)).ok();
    text
}

/// Hour text layer content plus the last displayed hour.
#[derive(Clone, Debug, Default)]
pub struct HourTextUpdater {
    last_hour: Option<u8>,
    text: HourText,
}

impl HourTextUpdater {
    pub const fn new() -> Self {
        Self {
            last_hour: None,
            text: String::new(),
        }
    }

    /// Recompute the text for `now`.
    ///
    /// Returns `true` when the text was reformatted and the layer needs a
    /// redraw, `false` when the displayed hour is unchanged.
    pub fn update(
        &mut self,
        now: WallTime,
        is_24h: bool,
    ) -> bool {
        let hour = display_hour(now);
        if self.last_hour == Some(hour) {
            return false;
        }
        self.last_hour = Some(hour);
        self.text = format_hour(hour, is_24h);
        true
    }

    /// Forget the last displayed hour so the next update always reformats.
    #[inline]
    pub fn invalidate(&mut self) { self.last_hour = None; }

    /// Currently displayed text (empty before the first update).
    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(
        hour: u8,
        minute: u8,
    ) -> WallTime {
        WallTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_round_up_last_three_minutes() {
        for m in 57..60 {
            assert_eq!(display_hour(at(9, m)), 10);
            assert_eq!(display_hour(at(23, m)), 0);
        }
        for m in 0..57 {
            assert_eq!(display_hour(at(9, m)), 9);
            assert_eq!(display_hour(at(23, m)), 23);
        }
    }

    #[test]
    fn test_format_24h() {
        assert_eq!(format_hour(0, true).as_str(), "00");
        assert_eq!(format_hour(7, true).as_str(), "07");
        assert_eq!(format_hour(23, true).as_str(), "23");
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(format_hour(0, false).as_str(), "12");
        assert_eq!(format_hour(1, false).as_str(), "01");
        assert_eq!(format_hour(12, false).as_str(), "12");
        assert_eq!(format_hour(13, false).as_str(), "01");
        assert_eq!(format_hour(23, false).as_str(), "11");
    }

    #[test]
    fn test_update_suppresses_same_hour() {
        let mut updater = HourTextUpdater::new();
        assert_eq!(updater.text(), "");

        assert!(updater.update(at(14, 5), true));
        assert_eq!(updater.text(), "14");
        assert!(!updater.update(at(14, 30), true));
        assert!(!updater.update(at(14, 56), true));

        // Round-up changes the displayed hour
        assert!(updater.update(at(14, 57), true));
        assert_eq!(updater.text(), "15");
        assert!(!updater.update(at(15, 0), true));
    }

    #[test]
    fn test_format_change_waits_for_new_hour() {
        let mut updater = HourTextUpdater::new();
        updater.update(at(15, 0), true);
        assert!(!updater.update(at(15, 1), false));
        assert_eq!(updater.text(), "15");

        updater.invalidate();
        assert!(updater.update(at(15, 1), false));
        assert_eq!(updater.text(), "03");
    }

    #[test]
    fn test_midnight_wrap() {
        let mut updater = HourTextUpdater::new();
        updater.update(at(23, 58), true);
        assert_eq!(updater.text(), "00");
        assert_eq!(updater.last_hour, Some(0));
    }
}
