//! Full-screen inversion overlay.
//!
//! The overlay sits on top of every other layer and swaps black and white.
//! Frames are always drawn from scratch, so instead of reading back the
//! framebuffer the overlay wraps the draw target and inverts every color on the
//! way through.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draw target adapter that inverts all colors drawn through it.
pub struct Inverted<'a, D> {
    target: &'a mut D,
}

impl<'a, D> Inverted<'a, D> {
    pub fn new(target: &'a mut D) -> Self { Self { target } }
}

impl<D> Dimensions for Inverted<'_, D>
where
    D: Dimensions,
{
    fn bounding_box(&self) -> Rectangle { self.target.bounding_box() }
}

impl<D> DrawTarget for Inverted<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.target
            .draw_iter(pixels.into_iter().map(|Pixel(p, color)| Pixel(p, color.invert())))
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.target
            .fill_contiguous(area, colors.into_iter().map(BinaryColor::invert))
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.target.fill_solid(area, color.invert())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.target.clear(color.invert())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::testing::FrameBuffer;

    #[test]
    fn test_clear_is_inverted() {
        let mut fb = FrameBuffer::new(BLACK);
        Inverted::new(&mut fb).clear(BLACK).ok();
        assert_eq!(fb.count(BLACK), 0);
    }

    #[test]
    fn test_primitives_are_inverted() {
        let mut fb = FrameBuffer::new(WHITE);
        {
            let mut inverted = Inverted::new(&mut fb);
            inverted.clear(WHITE).ok();
            Rectangle::new(Point::new(10, 10), Size::new(4, 4))
                .into_styled(PrimitiveStyle::with_fill(BLACK))
                .draw(&mut inverted)
                .ok();
        }
        assert_eq!(fb.pixel(11, 11), WHITE);
        assert_eq!(fb.pixel(50, 50), BLACK);
        assert_eq!(fb.count(WHITE), 16);
    }

    #[test]
    fn test_bounding_box_passes_through() {
        let mut fb = FrameBuffer::new(WHITE);
        let expected = fb.bounding_box();
        assert_eq!(Inverted::new(&mut fb).bounding_box(), expected);
    }
}
