//! Compile-time configuration for the watchface.
//!
//! Screen geometry matches the 144x168 1-bit panel of the target watch. Persist
//! keys and the message key are part of the on-device contract with the store
//! and the companion app, so they must never be renumbered.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Full-screen bounds, used by the minute layer and the inversion overlay.
pub const SCREEN_BOUNDS: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Frame of the hour text layer.
pub const HOUR_TEXT_FRAME: Rectangle = Rectangle::new(Point::new(0, 44), Size::new(144, 80));

const _: () = assert!(HOUR_TEXT_FRAME.size.width <= SCREEN_WIDTH);
const _: () = assert!(HOUR_TEXT_FRAME.top_left.y as u32 + HOUR_TEXT_FRAME.size.height <= SCREEN_HEIGHT);

// =============================================================================
// Hour Display
// =============================================================================

/// First minute at which the displayed hour rounds up to the next hour.
pub const ROUND_UP_MINUTE: u8 = 57;

const _: () = assert!(ROUND_UP_MINUTE < 60);

// =============================================================================
// Persistent Storage
// =============================================================================

/// Persist key holding the storage schema version (i32).
pub const PERSIST_KEY_VERSION: u32 = 1;

/// Persist key holding the inversion flag (bool).
pub const PERSIST_KEY_INVERT: u32 = 2;

/// Current storage schema version. Bump when the stored layout changes.
pub const STORAGE_VERSION: i32 = 1;

/// Factory default for the inversion flag.
pub const DEFAULT_INVERTED: bool = true;

const _: () = assert!(PERSIST_KEY_VERSION != PERSIST_KEY_INVERT);

// =============================================================================
// Companion Messages
// =============================================================================

/// Message key carrying the inversion toggle (`KEY_INVERT` on the companion side).
pub const MESSAGE_KEY_INVERT: u32 = 0;

/// Message value switching the overlay on.
pub const INVERT_ON: &str = "on";

/// Message value switching the overlay off.
pub const INVERT_OFF: &str = "off";
