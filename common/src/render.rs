//! Render state tracking for minute segment redraws.
//!
//! The host calls the tick handler every minute but the segment only changes
//! roughly every 7.5 minutes. [`RenderState`] keeps the last segment that was
//! requested so the minute layer is invalidated only on an actual change.
//!
//! # Update Strategy
//!
//! | Element        | Update Frequency            | Strategy              |
//! |----------------|-----------------------------|-----------------------|
//! | Hour text      | On displayed-hour change    | `HourTextUpdater`     |
//! | Minute segment | On segment change           | `RenderState`         |
//! | Inversion      | On inversion state change   | Full window redraw    |

use crate::segment::Segment;

/// Tracks the last segment handed to the renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderState {
    prev_segment: Option<Segment>,
}

impl RenderState {
    pub const fn new() -> Self { Self { prev_segment: None } }

    /// Record `segment` and report whether it differs from the previous one.
    ///
    /// Always dirty on the first call after [`new`](Self::new) or
    /// [`reset`](Self::reset).
    pub fn check_segment_dirty(
        &mut self,
        segment: Segment,
    ) -> bool {
        let dirty = self.prev_segment != Some(segment);
        self.prev_segment = Some(segment);
        dirty
    }

    #[inline]
    pub const fn prev_segment(&self) -> Option<Segment> { self.prev_segment }

    /// Forget the last segment, e.g. after the window was recreated.
    #[inline]
    pub fn reset(&mut self) { self.prev_segment = None; }
}
