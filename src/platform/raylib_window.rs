//! Raylib window backend.
//!
//! Raylib only allows drawing inside a `begin_drawing` scope that presents
//! when dropped, while the engine issues `fill`/`fill_rect` calls one by one
//! and presents at the end of the render pass. [`RaylibPlatform`] therefore
//! queues [`DrawCmd`]s during the frame and replays them inside a single
//! drawing scope on [`Display::present`].
//!
//! Input is read with `is_key_down` for a fixed table of named keys. Raylib
//! polls window and keyboard events at the end of each drawing scope, so the
//! snapshot taken at the start of a tick reflects the previous present.

use log::{debug, info};
use raylib::ffi;
use raylib::prelude::*;

use crate::events::input::KeySnapshot;
use crate::geometry::{self, Resolution};
use crate::platform::{Display, DrawCmd, KeyInput};

/// Keys reported in snapshots, with their engine names.
const TRACKED_KEYS: &[(KeyboardKey, &str)] = &[
    (KeyboardKey::KEY_A, "a"),
    (KeyboardKey::KEY_B, "b"),
    (KeyboardKey::KEY_C, "c"),
    (KeyboardKey::KEY_D, "d"),
    (KeyboardKey::KEY_E, "e"),
    (KeyboardKey::KEY_F, "f"),
    (KeyboardKey::KEY_G, "g"),
    (KeyboardKey::KEY_H, "h"),
    (KeyboardKey::KEY_I, "i"),
    (KeyboardKey::KEY_J, "j"),
    (KeyboardKey::KEY_K, "k"),
    (KeyboardKey::KEY_L, "l"),
    (KeyboardKey::KEY_M, "m"),
    (KeyboardKey::KEY_N, "n"),
    (KeyboardKey::KEY_O, "o"),
    (KeyboardKey::KEY_P, "p"),
    (KeyboardKey::KEY_Q, "q"),
    (KeyboardKey::KEY_R, "r"),
    (KeyboardKey::KEY_S, "s"),
    (KeyboardKey::KEY_T, "t"),
    (KeyboardKey::KEY_U, "u"),
    (KeyboardKey::KEY_V, "v"),
    (KeyboardKey::KEY_W, "w"),
    (KeyboardKey::KEY_X, "x"),
    (KeyboardKey::KEY_Y, "y"),
    (KeyboardKey::KEY_Z, "z"),
    (KeyboardKey::KEY_ZERO, "0"),
    (KeyboardKey::KEY_ONE, "1"),
    (KeyboardKey::KEY_TWO, "2"),
    (KeyboardKey::KEY_THREE, "3"),
    (KeyboardKey::KEY_FOUR, "4"),
    (KeyboardKey::KEY_FIVE, "5"),
    (KeyboardKey::KEY_SIX, "6"),
    (KeyboardKey::KEY_SEVEN, "7"),
    (KeyboardKey::KEY_EIGHT, "8"),
    (KeyboardKey::KEY_NINE, "9"),
    (KeyboardKey::KEY_UP, "up"),
    (KeyboardKey::KEY_DOWN, "down"),
    (KeyboardKey::KEY_LEFT, "left"),
    (KeyboardKey::KEY_RIGHT, "right"),
    (KeyboardKey::KEY_SPACE, "space"),
    (KeyboardKey::KEY_ENTER, "enter"),
    (KeyboardKey::KEY_ESCAPE, "esc"),
];

pub struct RaylibPlatform {
    rl: RaylibHandle,
    thread: RaylibThread,
    resolution: Resolution,
    queue: Vec<DrawCmd>,
}

impl RaylibPlatform {
    /// Open a window of the given size.
    pub fn open(resolution: Resolution, title: &str) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(resolution.width as i32, resolution.height as i32)
            .title(title)
            .build();
        // Disable ESC to exit; it is reported as a key instead
        rl.set_exit_key(None);
        info!(
            "Opened {}x{} window \"{}\"",
            resolution.width, resolution.height, title
        );
        Self {
            rl,
            thread,
            resolution,
            queue: Vec::new(),
        }
    }
}

fn to_raylib(color: geometry::Color) -> Color {
    Color::new(color.r, color.g, color.b, 255)
}

impl Display for RaylibPlatform {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn fill(&mut self, color: geometry::Color) {
        self.queue.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: geometry::Color) {
        self.queue.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn present(&mut self) {
        let mut d = self.rl.begin_drawing(&self.thread);
        for cmd in self.queue.drain(..) {
            match cmd {
                DrawCmd::Clear(color) => d.clear_background(to_raylib(color)),
                DrawCmd::Rect { x, y, w, h, color } => d.draw_rectangle(
                    x.round() as i32,
                    y.round() as i32,
                    w.round().max(1.0) as i32,
                    h.round().max(1.0) as i32,
                    to_raylib(color),
                ),
            }
        }
    }

    fn refresh_rate(&self) -> u32 {
        let rate = unsafe { ffi::GetMonitorRefreshRate(ffi::GetCurrentMonitor()) };
        debug!("Monitor refresh rate: {}", rate);
        rate.max(0) as u32
    }

    fn poll_quit(&mut self) -> bool {
        self.rl.window_should_close()
    }
}

impl KeyInput for RaylibPlatform {
    fn active_keys(&mut self) -> KeySnapshot {
        TRACKED_KEYS
            .iter()
            .filter(|(key, _)| self.rl.is_key_down(*key))
            .map(|(_, name)| *name)
            .collect()
    }
}
