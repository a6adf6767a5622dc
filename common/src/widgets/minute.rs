//! Minute segment layer.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::primitives::fill_convex_polygon;
use crate::colors::FOREGROUND;
use crate::geometry::MinutePath;

/// Fill a placed minute path with the foreground color.
pub fn draw_minute_segment<D>(
    display: &mut D,
    path: &MinutePath,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    fill_convex_polygon(display, path.points(), FOREGROUND);
}
