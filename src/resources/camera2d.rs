//! 2D camera used for culling and world-to-camera translation.
//!
//! The camera box is centred on [`Camera2d::position`]. Culling uses the
//! configured viewport size plus a buffer margin on both axes, so objects
//! slightly outside the visible area are still drawn.

use crate::geometry::Position2d;

/// Default culling slack added to both axes of the viewport.
pub const DEFAULT_VIEWPORT_BUFFER: f32 = 5.0;

/// Logical viewport size with its culling buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize2d {
    pub x: f32,
    pub y: f32,
    pub buffer: f32,
}

impl ViewportSize2d {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            buffer: DEFAULT_VIEWPORT_BUFFER,
        }
    }

    pub fn with_buffer(x: f32, y: f32, buffer: f32) -> Self {
        Self { x, y, buffer }
    }
}

impl Default for ViewportSize2d {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[derive(Clone, Debug)]
pub struct Camera2d {
    real_size: ViewportSize2d,
    culling_size: (f32, f32),
    position: Position2d,
}

impl Camera2d {
    pub fn new(size: ViewportSize2d, initial_pos: Position2d) -> Self {
        Self {
            real_size: size,
            culling_size: (size.x + size.buffer, size.y + size.buffer),
            position: initial_pos,
        }
    }

    pub fn position(&self) -> Position2d {
        self.position
    }

    /// The viewport size as configured, without the buffer.
    pub fn real_size(&self) -> ViewportSize2d {
        self.real_size
    }

    /// Width and height of the box used for visibility tests.
    pub fn culling_size(&self) -> (f32, f32) {
        self.culling_size
    }

    /// Whether a square of side `object_size` centred on `pos` overlaps the
    /// camera box. Touching edges do not count as overlap.
    pub fn is_visible(&self, pos: Position2d, object_size: f32) -> bool {
        let (w, h) = self.culling_size;
        let half = object_size / 2.0;

        self.position.x - w / 2.0 < pos.x + half
            && self.position.x + w / 2.0 > pos.x - half
            && self.position.y - h / 2.0 < pos.y + half
            && self.position.y + h / 2.0 > pos.y - half
    }

    /// Pan the camera by a delta. The delta's rotation is added as well.
    pub fn move_by(&mut self, delta: Position2d) {
        self.position += delta;
    }

    /// Translate a world position into camera-relative coordinates. The
    /// source rotation is kept as-is.
    pub fn global_to_local(&self, global: Position2d) -> Position2d {
        Position2d::new(
            global.x - self.position.x,
            global.y - self.position.y,
            global.rotation,
        )
    }
}

impl Default for Camera2d {
    fn default() -> Self {
        Self::new(ViewportSize2d::default(), Position2d::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rotation2d;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn camera_100() -> Camera2d {
        Camera2d::new(ViewportSize2d::new(100.0, 100.0), Position2d::at(0.0, 0.0))
    }

    #[test]
    fn buffer_is_added_to_culling_size() {
        let cam = camera_100();
        assert_eq!(cam.culling_size(), (105.0, 105.0));
        assert_eq!(cam.real_size().x, 100.0);
        assert_eq!(cam.real_size().buffer, DEFAULT_VIEWPORT_BUFFER);
    }

    #[test]
    fn object_near_corner_is_visible() {
        assert!(camera_100().is_visible(Position2d::at(50.0, 50.0), 10.0));
    }

    #[test]
    fn far_object_is_not_visible() {
        assert!(!camera_100().is_visible(Position2d::at(1000.0, 1000.0), 10.0));
    }

    #[test]
    fn touching_edge_is_not_visible() {
        let cam = camera_100();
        // camera right edge at 52.5, object left edge at 57.5 - 5 = 52.5
        assert!(!cam.is_visible(Position2d::at(57.5, 0.0), 10.0));
        assert!(!cam.is_visible(Position2d::at(0.0, -57.5), 10.0));
        assert!(cam.is_visible(Position2d::at(57.4, 0.0), 10.0));
    }

    #[test]
    fn zero_sized_object_on_edge_is_not_visible() {
        let cam = camera_100();
        assert!(!cam.is_visible(Position2d::at(52.5, 0.0), 0.0));
        assert!(cam.is_visible(Position2d::at(52.0, 0.0), 0.0));
    }

    #[test]
    fn move_by_shifts_visibility() {
        let mut cam = camera_100();
        cam.move_by(Position2d::at(1000.0, 1000.0));
        assert!(cam.is_visible(Position2d::at(1000.0, 1000.0), 10.0));
        assert!(!cam.is_visible(Position2d::at(0.0, 0.0), 10.0));
    }

    #[test]
    fn move_by_adds_rotation() {
        let mut cam = Camera2d::new(
            ViewportSize2d::default(),
            Position2d::new(0.0, 0.0, Rotation2d::new(350.0)),
        );
        cam.move_by(Position2d::new(0.1, 0.1, Rotation2d::new(20.0)));
        assert!(approx_eq(cam.position().x, 0.1));
        assert!(approx_eq(cam.position().rotation.angle(), 10.0));
    }

    #[test]
    fn global_to_local_keeps_source_rotation() {
        let mut cam = camera_100();
        cam.move_by(Position2d::new(10.0, -5.0, Rotation2d::new(45.0)));
        let local = cam.global_to_local(Position2d::new(12.0, 5.0, Rotation2d::new(90.0)));
        assert!(approx_eq(local.x, 2.0));
        assert!(approx_eq(local.y, 10.0));
        assert!(approx_eq(local.rotation.angle(), 90.0));
    }
}
