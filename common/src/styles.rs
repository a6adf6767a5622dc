//! Pre-computed static text styles.
//!
//! Defined as `const` so the styles live in read-only data and are never
//! rebuilt when the hour text is redrawn.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::FOREGROUND;

/// Centered horizontally and vertically around the text position.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Hour digits: largest ProFont size, foreground color, transparent background.
pub const HOUR_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_24_POINT, FOREGROUND);
