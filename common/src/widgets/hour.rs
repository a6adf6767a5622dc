//! Hour text layer.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::HOUR_TEXT_FRAME;
use crate::styles::{CENTERED_MIDDLE, HOUR_STYLE};

/// Draw the hour digits centered in the hour text frame.
pub fn draw_hour_text<D>(
    display: &mut D,
    text: &str,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    if text.is_empty() {
        return;
    }
    Text::with_text_style(text, HOUR_TEXT_FRAME.center(), HOUR_STYLE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
