//! Geometry value types.
//!
//! Plain `Copy` records used throughout the engine:
//! - [`Rotation2d`] – an angle in degrees, always kept in `[0, 360)`
//! - [`Position2d`] – world coordinates plus a rotation
//! - [`Velocity`] – a polar vector (magnitude + direction in degrees)
//! - [`Color`], [`Resolution`], [`SquareSize`] – drawing parameters
//!
//! Arithmetic is only defined between values of the same type, so adding a
//! position to anything other than a position does not compile.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A 2D rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation2d {
    angle: f32,
}

impl Rotation2d {
    pub fn new(angle: f32) -> Self {
        Self {
            angle: normalize_degrees(angle),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotate in place by another rotation.
    pub fn rotate(&mut self, by: Rotation2d) {
        self.angle = normalize_degrees(self.angle + by.angle);
    }
}

impl Add for Rotation2d {
    type Output = Rotation2d;

    fn add(self, other: Rotation2d) -> Rotation2d {
        Rotation2d::new(self.angle + other.angle)
    }
}

impl AddAssign for Rotation2d {
    fn add_assign(&mut self, other: Rotation2d) {
        self.rotate(other);
    }
}

impl fmt::Display for Rotation2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.angle)
    }
}

/// A point in world space with an attached rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position2d {
    pub x: f32,
    pub y: f32,
    pub rotation: Rotation2d,
}

impl Position2d {
    pub fn new(x: f32, y: f32, rotation: Rotation2d) -> Self {
        Self { x, y, rotation }
    }

    /// Position with a zero rotation.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, Rotation2d::default())
    }

    pub fn rotate(&mut self, by: Rotation2d) {
        self.rotation.rotate(by);
    }
}

impl Add for Position2d {
    type Output = Position2d;

    fn add(self, other: Position2d) -> Position2d {
        Position2d {
            x: self.x + other.x,
            y: self.y + other.y,
            rotation: self.rotation + other.rotation,
        }
    }
}

impl AddAssign for Position2d {
    fn add_assign(&mut self, other: Position2d) {
        *self = *self + other;
    }
}

impl fmt::Display for Position2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {})", self.x, self.y, self.rotation)
    }
}

/// Polar velocity: a non-negative magnitude and a direction in degrees.
///
/// Direction `0` points up, `90` right, `180` down and `270` left, matching
/// the key mapping used by [`Controls`](crate::components::controls::Controls).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub magnitude: f32,
    direction: f32,
}

impl Velocity {
    pub fn new(magnitude: f32, direction: f32) -> Self {
        Self {
            magnitude,
            direction: normalize_degrees(direction),
        }
    }

    /// Direction in degrees, always in `[0, 360)`.
    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: f32) {
        self.direction = normalize_degrees(direction);
    }

    /// Cartesian components `(m·cos d, m·sin d)` of this vector.
    pub fn components(&self) -> (f32, f32) {
        let radians = self.direction.to_radians();
        (
            self.magnitude * radians.cos(),
            self.magnitude * radians.sin(),
        )
    }
}

/// Exact vector composition of two velocities.
///
/// The resultant magnitude is `sqrt(m1² + m2² + 2·m1·m2·cos(d1 - d2))`, so two
/// equal opposing velocities cancel out.
impl Add for Velocity {
    type Output = Velocity;

    fn add(self, other: Velocity) -> Velocity {
        let (x1, y1) = self.components();
        let (x2, y2) = other.components();
        let (x, y) = (x1 + x2, y1 + y2);

        Velocity::new(x.hypot(y), y.atan2(x).to_degrees())
    }
}

impl AddAssign for Velocity {
    fn add_assign(&mut self, other: Velocity) {
        *self = *self + other;
    }
}

/// RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Side length of a square sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareSize {
    pub length: f32,
}

impl SquareSize {
    pub fn new(length: f32) -> Self {
        Self { length }
    }
}
