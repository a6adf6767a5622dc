//! Minute-to-segment mapping.
//!
//! The hour is split into eight wedges of 7.5 minutes each. Segment `k` is
//! centered on minute `7.5 * k`, so segment 0 (top edge) covers minutes 57..=3,
//! segment 2 (right edge) covers 12..=18 and so on clockwise.
//!
//! The mapping is scaled by 4 so it stays in integer arithmetic:
//!
//! ```text
//! segment = ((minute * 4 + 15) / 30) % 8
//! ```

/// Number of distinct segments.
pub const SEGMENT_COUNT: usize = 8;

/// One of the eight minute segments drawn around the screen border.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, PartialOrd, Ord, Hash)]
pub struct Segment(u8);

impl Segment {
    /// All segments in clockwise order, starting at the top.
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Create a segment from an index, `None` if the index is not in 0..8.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < SEGMENT_COUNT { Some(Self(index)) } else { None }
    }

    /// Segment index, 0-7.
    #[inline]
    pub const fn index(self) -> u8 { self.0 }

    /// Even segments sit on a screen edge, odd ones on a corner.
    #[inline]
    pub const fn is_straight(self) -> bool { self.0 % 2 == 0 }
}

/// Map a minute of the hour to its segment.
///
/// Total over every `u8`; minutes above 59 still land in 0..8.
pub const fn segment_for_minute(minute: u8) -> Segment {
    let scaled = minute as u32 * 4 + 15;
    Segment(((scaled / 30) % SEGMENT_COUNT as u32) as u8)
}
