//! Display and input backends.
//!
//! The engine core only talks to the outside world through two traits:
//! - [`Display`] – a drawable surface that can be cleared, drawn on with
//!   filled rectangles, presented, and polled for a quit request
//! - [`KeyInput`] – a snapshot of the keys held right now
//!
//! Anything implementing both is a [`Platform`]. Two are provided:
//! - [`headless`] – records draw calls in memory; used by tests and `--headless`
//! - [`raylib_window`] – a real raylib window (feature `raylib`, Linux/Windows)
//!
//! [`screen`] adds the centre-based drawing helpers sprites use.

pub mod headless;
#[cfg(all(feature = "raylib", any(target_os = "linux", target_os = "windows")))]
pub mod raylib_window;
pub mod screen;

use crate::events::input::KeySnapshot;
use crate::geometry::{Color, Resolution};

/// Refresh rate assumed when a display cannot report one.
pub const FALLBACK_REFRESH_RATE: u32 = 60;

/// One primitive drawing operation, in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface.
    Clear(Color),
    /// Filled axis-aligned rectangle; `x`/`y` is the top-left corner.
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
}

/// A drawable surface and its window.
pub trait Display {
    fn resolution(&self) -> Resolution;

    /// Fill the whole surface with one colour.
    fn fill(&mut self, color: Color);

    /// Fill a rectangle whose top-left corner is at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Show everything drawn since the previous present.
    fn present(&mut self);

    /// Native refresh rate in Hz, or 0 when unknown.
    fn refresh_rate(&self) -> u32;

    /// Drain window events; true if the user asked to quit.
    fn poll_quit(&mut self) -> bool;
}

/// Source of the currently held keys.
pub trait KeyInput {
    fn active_keys(&mut self) -> KeySnapshot;
}

/// A backend providing both a display and keyboard input.
pub trait Platform: Display + KeyInput {}

impl<T: Display + KeyInput> Platform for T {}
