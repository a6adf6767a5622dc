//! Drawable layers of the watchface.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>` so the same
//! code renders to the device panel and to the desktop simulator.

mod hour;
mod inverter;
mod minute;
mod primitives;

pub use hour::draw_hour_text;
pub use inverter::Inverted;
pub use minute::draw_minute_segment;
pub use primitives::fill_convex_polygon;
