//! Color constants for the 1-bit watch display.
//!
//! The panel is monochrome, so every drawable uses
//! [`BinaryColor`](embedded_graphics::pixelcolor::BinaryColor). `On` is a lit
//! (white) pixel and `Off` a dark one, which is also how the simulator's default
//! theme renders them.

use embedded_graphics::pixelcolor::BinaryColor;

/// White pixel.
pub const WHITE: BinaryColor = BinaryColor::On;

/// Black pixel.
pub const BLACK: BinaryColor = BinaryColor::Off;

/// Window background before inversion.
pub const BACKGROUND: BinaryColor = WHITE;

/// Hour text and minute segment fill before inversion.
pub const FOREGROUND: BinaryColor = BLACK;
