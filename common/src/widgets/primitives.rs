//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

/// Fill a convex polygon as a triangle fan around its first point.
///
/// Polygons with fewer than three points draw nothing.
pub fn fill_convex_polygon<D, I>(
    display: &mut D,
    points: I,
    color: BinaryColor,
) where
    D: DrawTarget<Color = BinaryColor>,
    I: IntoIterator<Item = Point>,
{
    let style = PrimitiveStyle::with_fill(color);
    let mut points = points.into_iter();

    let Some(first) = points.next() else {
        return;
    };
    let Some(mut prev) = points.next() else {
        return;
    };

    for p in points {
        Triangle::new(first, prev, p).into_styled(style).draw(display).ok();
        prev = p;
    }
}
