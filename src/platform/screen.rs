//! Centre-based drawing on top of a [`Display`].
//!
//! Sprite positions are camera-local: `(0, 0)` is the middle of the surface.
//! [`Screen`] converts those into the top-left pixel coordinates that
//! [`Display::fill_rect`] expects.

use crate::geometry::{Color, Position2d, SquareSize};
use crate::platform::Display;

pub struct Screen<'a, D: Display + ?Sized> {
    display: &'a mut D,
}

impl<'a, D: Display + ?Sized> Screen<'a, D> {
    pub fn new(display: &'a mut D) -> Self {
        Self { display }
    }

    pub fn fill(&mut self, color: Color) {
        self.display.fill(color);
    }

    /// Draw a square centred on `pos`, relative to the surface centre.
    pub fn square(&mut self, size: SquareSize, color: Color, pos: Position2d) {
        let res = self.display.resolution();
        let x = pos.x + res.width as f32 / 2.0 - size.length / 2.0;
        let y = pos.y + res.height as f32 / 2.0 - size.length / 2.0;
        self.display.fill_rect(x, y, size.length, size.length, color);
    }

    /// Draw a single pixel at `pos`.
    pub fn set_at(&mut self, pos: Position2d, color: Color) {
        self.square(SquareSize::new(1.0), color, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Resolution;
    use crate::platform::DrawCmd;
    use crate::platform::headless::HeadlessPlatform;

    #[test]
    fn square_is_centred_on_surface() {
        let mut platform = HeadlessPlatform::new(Resolution::new(800, 600));
        Screen::new(&mut platform).square(
            SquareSize::new(200.0),
            Color::RED,
            Position2d::at(0.0, 0.0),
        );
        assert_eq!(
            platform.pending()[0],
            DrawCmd::Rect {
                x: 300.0,
                y: 200.0,
                w: 200.0,
                h: 200.0,
                color: Color::RED
            }
        );
    }

    #[test]
    fn set_at_draws_one_pixel_square() {
        let mut platform = HeadlessPlatform::new(Resolution::new(10, 10));
        Screen::new(&mut platform).set_at(Position2d::at(1.0, -2.0), Color::GREEN);
        assert_eq!(
            platform.pending()[0],
            DrawCmd::Rect {
                x: 5.5,
                y: 2.5,
                w: 1.0,
                h: 1.0,
                color: Color::GREEN
            }
        );
    }
}
