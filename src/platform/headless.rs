//! In-memory platform.
//!
//! [`HeadlessPlatform`] keeps every draw command issued since the last
//! present, remembers the last presented frame, and reports whatever keys the
//! caller has pressed. It can request quit after a fixed number of presented
//! frames so a bounded run terminates on its own.

use log::debug;

use crate::events::input::{Key, KeySnapshot};
use crate::geometry::{Color, Resolution};
use crate::platform::{Display, DrawCmd, KeyInput};

const HEADLESS_REFRESH_RATE: u32 = 60;

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    resolution: Resolution,
    refresh_rate: u32,
    pending: Vec<DrawCmd>,
    last_frame: Vec<DrawCmd>,
    frames_presented: u64,
    quit_after: Option<u64>,
    quit_requested: bool,
    keys: KeySnapshot,
}

impl HeadlessPlatform {
    pub fn new(resolution: Resolution) -> Self {
        debug!(
            "Headless surface {}x{}",
            resolution.width, resolution.height
        );
        Self {
            resolution,
            refresh_rate: HEADLESS_REFRESH_RATE,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
            quit_after: None,
            quit_requested: false,
            keys: KeySnapshot::new(),
        }
    }

    /// Report `rate` Hz from [`Display::refresh_rate`].
    pub fn with_refresh_rate(mut self, rate: u32) -> Self {
        self.refresh_rate = rate;
        self
    }

    /// Ask to quit once `frames` frames have been presented.
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    /// Make the next [`Display::poll_quit`] return true.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn press(&mut self, key: impl Into<Key>) {
        self.keys.press(key);
    }

    pub fn release(&mut self, key: impl Into<Key>) {
        self.keys.release(key);
    }

    pub fn set_keys(&mut self, keys: KeySnapshot) {
        self.keys = keys;
    }

    /// Commands drawn since the last present.
    pub fn pending(&self) -> &[DrawCmd] {
        &self.pending
    }

    /// Commands of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCmd] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Rectangles of the last presented frame, without the clear.
    pub fn last_frame_rects(&self) -> impl Iterator<Item = &DrawCmd> {
        self.last_frame
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { .. }))
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(Resolution::default())
    }
}

impl Display for HeadlessPlatform {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn fill(&mut self, color: Color) {
        self.pending.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.pending.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }

    fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    fn poll_quit(&mut self) -> bool {
        let frames = self.frames_presented;
        if self.quit_after.is_some_and(|limit| frames >= limit) {
            self.quit_requested = true;
        }
        self.quit_requested
    }
}

impl KeyInput for HeadlessPlatform {
    fn active_keys(&mut self) -> KeySnapshot {
        self.keys.clone()
    }
}
