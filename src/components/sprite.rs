//! Drawable sprites held by [`Model`](super::model::Model).
//!
//! A sprite knows its footprint ([`Sprite::length`], used for culling) and how
//! to draw itself at a camera-local position through a [`Screen`].

use log::warn;

use crate::geometry::{Color, Position2d, SquareSize};
use crate::platform::Display;
use crate::platform::screen::Screen;

#[derive(Clone, Debug, PartialEq)]
pub enum Sprite {
    /// Footprint only; has no draw routine.
    Blank { length: f32 },
    /// Filled square centred on the position.
    Square { size: SquareSize, color: Color },
    /// A single pixel.
    Pixel(Color),
    /// A horizontal strip of pixels; the i-th is drawn `i` pixels right of
    /// the position.
    Pixels(Vec<Color>),
}

impl Sprite {
    pub fn square(length: f32, color: Color) -> Self {
        Sprite::Square {
            size: SquareSize::new(length),
            color,
        }
    }

    /// Side length used for visibility tests.
    pub fn length(&self) -> f32 {
        match self {
            Sprite::Blank { length } => *length,
            Sprite::Square { size, .. } => size.length,
            Sprite::Pixel(_) => 1.0,
            Sprite::Pixels(pixels) => pixels.len() as f32,
        }
    }

    pub fn display<D: Display + ?Sized>(&self, screen: &mut Screen<'_, D>, pos: Position2d) {
        match self {
            Sprite::Blank { .. } => {
                warn!("Blank sprite has no draw routine; use Square, Pixel or Pixels");
            }
            Sprite::Square { size, color } => screen.square(*size, *color, pos),
            Sprite::Pixel(color) => screen.set_at(pos, *color),
            Sprite::Pixels(pixels) => {
                for (i, color) in pixels.iter().enumerate() {
                    screen.set_at(pos + Position2d::at(i as f32, 0.0), *color);
                }
            }
        }
    }
}

/// A 200×200 red square.
impl Default for Sprite {
    fn default() -> Self {
        Sprite::square(200.0, Color::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Resolution;
    use crate::platform::DrawCmd;
    use crate::platform::headless::HeadlessPlatform;

    #[test]
    fn lengths() {
        assert_eq!(Sprite::Blank { length: 3.0 }.length(), 3.0);
        assert_eq!(Sprite::default().length(), 200.0);
        assert_eq!(Sprite::Pixel(Color::RED).length(), 1.0);
        assert_eq!(Sprite::Pixels(vec![Color::GREEN; 4]).length(), 4.0);
    }

    #[test]
    fn pixels_draw_in_a_row() {
        let mut platform = HeadlessPlatform::new(Resolution::new(100, 100));
        let sprite = Sprite::Pixels(vec![Color::GREEN; 4]);
        sprite.display(&mut Screen::new(&mut platform), Position2d::at(0.0, 0.0));

        let xs: Vec<f32> = platform
            .pending()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Rect { x, w, .. } => {
                    assert_eq!(*w, 1.0);
                    *x
                }
                DrawCmd::Clear(_) => panic!("unexpected clear"),
            })
            .collect();
        assert_eq!(xs, vec![49.5, 50.5, 51.5, 52.5]);
    }

    #[test]
    fn blank_draws_nothing() {
        let mut platform = HeadlessPlatform::default();
        Sprite::Blank { length: 10.0 }
            .display(&mut Screen::new(&mut platform), Position2d::default());
        assert!(platform.pending().is_empty());
    }
}
