use log::trace;

use crate::gameobject::GameObject;
use crate::geometry::Color;
use crate::platform::Display;
use crate::platform::screen::Screen;
use crate::resources::camera2d::Camera2d;

/// Draws one frame: clear to the background colour, draw every layer in
/// order, then present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    pub background: Color,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Renderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Render `objects` back to front (index 0 first). Returns how many were
    /// actually drawn after culling.
    pub fn render_pass<D: Display + ?Sized>(
        &self,
        display: &mut D,
        objects: &[GameObject],
        camera: &Camera2d,
    ) -> usize {
        let mut screen = Screen::new(display);
        screen.fill(self.background);
        let drawn = objects
            .iter()
            .filter(|obj| obj.render(&mut screen, camera))
            .count();
        trace!("Drew {} of {} objects", drawn, objects.len());
        display.present();
        drawn
    }
}
