//! Uncertainty Time watchface logic.
//!
//! The watchface shows the hour as two digits and the minute as one of eight
//! polygons around the screen border, so the time reads as "about quarter
//! past ten" rather than an exact minute. An optional overlay inverts the
//! whole screen; the choice is persisted across restarts.
//!
//! This crate contains everything that does not depend on a particular host:
//!
//! - [`segment`]: Minute-to-segment mapping
//! - [`geometry`]: Segment polygons, rotation and anchor table
//! - [`hour_text`]: Hour formatting with round-up and update suppression
//! - [`inversion`]: Persisted inversion setting and message parsing
//! - [`render`]: Last-drawn segment tracking
//! - [`host`]: Services the host firmware provides
//! - [`app`]: Callback handlers and the application state they share
//! - [`widgets`]: Layer drawing for any `DrawTarget<Color = BinaryColor>`
//!
//! # Testing
//!
//! Run tests on the host with:
//! ```bash
//! cargo test -p uncertainty-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while device builds stay `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod host;
pub mod hour_text;
pub mod inversion;
pub mod render;
pub mod segment;
pub mod styles;
pub mod time;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use app::{WatchApp, Watchface};
pub use host::{ConfigMessage, Host, LayerId, PersistentStore, StorageError};
pub use time::WallTime;
