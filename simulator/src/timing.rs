//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Event loop period. The watchface only changes once a minute, so this only
/// bounds input latency.
pub const FRAME_TIME: Duration = Duration::from_millis(50);
