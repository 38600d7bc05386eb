//! Engine configuration resource.
//!
//! Settings loaded from an INI file. Every key is optional; missing keys keep
//! their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//!
//! [background]
//! r = 255
//! g = 255
//! b = 255
//!
//! [camera]
//! width = 800
//! height = 600
//! buffer = 5
//!
//! [loop]
//! ticks_per_refresh = 1
//! ; overrides ticks_per_refresh when set
//! raw_tick_rate = 30
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::geometry::{Color, Resolution};
use crate::resources::camera2d::{DEFAULT_VIEWPORT_BUFFER, ViewportSize2d};
use crate::resources::tickclock::TickRate;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_CAMERA_WIDTH: f32 = 800.0;
const DEFAULT_CAMERA_HEIGHT: f32 = 600.0;
const DEFAULT_TICKS_PER_REFRESH: u32 = 1;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Upper bounds accepted from the `[loop]` section.
const MAX_TICKS_PER_REFRESH: u32 = 1_000;
const MAX_RAW_TICK_RATE: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Window (surface) size in pixels.
    pub resolution: Resolution,
    /// Colour the surface is cleared to before each render pass.
    pub background: Color,
    /// Logical camera viewport, including its culling buffer.
    pub viewport: ViewportSize2d,
    /// How fast the loop runs.
    pub tick_rate: TickRate,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            resolution: Resolution::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            background: Color::WHITE,
            viewport: ViewportSize2d::with_buffer(
                DEFAULT_CAMERA_WIDTH,
                DEFAULT_CAMERA_HEIGHT,
                DEFAULT_VIEWPORT_BUFFER,
            ),
            tick_rate: TickRate::PerRefresh(DEFAULT_TICKS_PER_REFRESH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load overrides from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> EngineResult<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            EngineError::Config(format!(
                "Failed to load {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        self.apply(&config)?;

        info!(
            "Loaded config: {}x{} window, background {}, camera {}x{} (+{}), rate {:?}",
            self.resolution.width,
            self.resolution.height,
            self.background,
            self.viewport.x,
            self.viewport.y,
            self.viewport.buffer,
            self.tick_rate
        );
        Ok(())
    }

    /// Load overrides from INI text.
    pub fn load_from_str(&mut self, text: &str) -> EngineResult<()> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(EngineError::Config)?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> EngineResult<()> {
        // [window] section
        if let Some(width) = get_u32(config, "window", "width")? {
            self.resolution.width = width;
        }
        if let Some(height) = get_u32(config, "window", "height")? {
            self.resolution.height = height;
        }

        // [background] section
        if let Some(r) = get_channel(config, "r")? {
            self.background.r = r;
        }
        if let Some(g) = get_channel(config, "g")? {
            self.background.g = g;
        }
        if let Some(b) = get_channel(config, "b")? {
            self.background.b = b;
        }

        // [camera] section
        if let Some(width) = get_float(config, "camera", "width")? {
            self.viewport.x = width as f32;
        }
        if let Some(height) = get_float(config, "camera", "height")? {
            self.viewport.y = height as f32;
        }
        if let Some(buffer) = get_float(config, "camera", "buffer")? {
            self.viewport.buffer = buffer as f32;
        }

        // [loop] section; a raw rate wins over a per-refresh multiplier
        if let Some(tpr) = get_u32(config, "loop", "ticks_per_refresh")? {
            if tpr > MAX_TICKS_PER_REFRESH {
                return Err(EngineError::Config(format!(
                    "[loop] ticks_per_refresh: {tpr} is above {MAX_TICKS_PER_REFRESH}"
                )));
            }
            self.tick_rate = TickRate::PerRefresh(tpr);
        }
        if let Some(raw) = get_float(config, "loop", "raw_tick_rate")? {
            // 0 runs unthrottled
            if raw != 0.0 && !(f32::MIN_POSITIVE as f64..=MAX_RAW_TICK_RATE).contains(&raw) {
                return Err(EngineError::Config(format!(
                    "[loop] raw_tick_rate: {raw} is not 0 or in {}..={MAX_RAW_TICK_RATE}",
                    f32::MIN_POSITIVE
                )));
            }
            self.tick_rate = TickRate::Raw(raw as f32);
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> EngineResult<()> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.resolution.width.to_string()));
        config.set("window", "height", Some(self.resolution.height.to_string()));

        config.set("background", "r", Some(self.background.r.to_string()));
        config.set("background", "g", Some(self.background.g.to_string()));
        config.set("background", "b", Some(self.background.b.to_string()));

        config.set("camera", "width", Some(self.viewport.x.to_string()));
        config.set("camera", "height", Some(self.viewport.y.to_string()));
        config.set("camera", "buffer", Some(self.viewport.buffer.to_string()));

        match self.tick_rate {
            TickRate::PerRefresh(n) => {
                config.set("loop", "ticks_per_refresh", Some(n.to_string()));
            }
            TickRate::Raw(hz) => {
                config.set("loop", "raw_tick_rate", Some(hz.to_string()));
            }
        }

        config.write(&self.config_path)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn get_uint(config: &Ini, section: &str, key: &str) -> EngineResult<Option<u64>> {
    config
        .getuint(section, key)
        .map_err(|e| EngineError::Config(format!("[{section}] {key}: {e}")))
}

fn get_u32(config: &Ini, section: &str, key: &str) -> EngineResult<Option<u32>> {
    match get_uint(config, section, key)? {
        Some(value) => u32::try_from(value).map(Some).map_err(|_| {
            EngineError::Config(format!("[{section}] {key}: {value} does not fit in 32 bits"))
        }),
        None => Ok(None),
    }
}

fn get_float(config: &Ini, section: &str, key: &str) -> EngineResult<Option<f64>> {
    config
        .getfloat(section, key)
        .map_err(|e| EngineError::Config(format!("[{section}] {key}: {e}")))
}

fn get_channel(config: &Ini, key: &str) -> EngineResult<Option<u8>> {
    match get_uint(config, "background", key)? {
        Some(value) => u8::try_from(value).map(Some).map_err(|_| {
            EngineError::Config(format!("[background] {key}: {value} is not in 0..=255"))
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.resolution, Resolution::new(800, 600));
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.viewport, ViewportSize2d::new(800.0, 600.0));
        assert_eq!(config.tick_rate, TickRate::PerRefresh(1));
        assert_eq!(config.config_path(), Path::new("./config.ini"));
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let mut config = EngineConfig::new();
        config
            .load_from_str("[window]\nwidth = 1024\n[background]\ng = 0\n")
            .unwrap();
        assert_eq!(config.resolution, Resolution::new(1024, 600));
        assert_eq!(config.background, Color::new(255, 0, 255));
        assert_eq!(config.tick_rate, TickRate::PerRefresh(1));
    }

    #[test]
    fn raw_rate_overrides_per_refresh() {
        let mut config = EngineConfig::new();
        config
            .load_from_str("[loop]\nticks_per_refresh = 2\nraw_tick_rate = 30\n")
            .unwrap();
        assert_eq!(config.tick_rate, TickRate::Raw(30.0));
    }

    #[test]
    fn camera_section() {
        let mut config = EngineConfig::new();
        config
            .load_from_str("[camera]\nwidth = 100\nheight = 50\nbuffer = 0\n")
            .unwrap();
        assert_eq!(config.viewport, ViewportSize2d::with_buffer(100.0, 50.0, 0.0));
    }

    #[test]
    fn bad_values_are_config_errors() {
        let mut config = EngineConfig::new();
        let err = config
            .load_from_str("[window]\nwidth = wide\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = config.load_from_str("[background]\nr = 300\n").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        for text in [
            "[window]\nwidth = 4294967297\n",
            "[window]\nheight = 4294967297\n",
            "[loop]\nticks_per_refresh = 4294967297\n",
        ] {
            let mut config = EngineConfig::new();
            assert!(
                matches!(config.load_from_str(text), Err(EngineError::Config(_))),
                "{text:?} should not load"
            );
            assert_eq!(config, EngineConfig::new());
        }
    }

    #[test]
    fn absurd_loop_rates_are_rejected() {
        for text in [
            "[loop]\nticks_per_refresh = 100000000\n",
            "[loop]\nraw_tick_rate = 1e-39\n",
            "[loop]\nraw_tick_rate = -5\n",
            "[loop]\nraw_tick_rate = inf\n",
            "[loop]\nraw_tick_rate = NaN\n",
        ] {
            let mut config = EngineConfig::new();
            assert!(
                matches!(config.load_from_str(text), Err(EngineError::Config(_))),
                "{text:?} should not load"
            );
        }

        let mut config = EngineConfig::new();
        config.load_from_str("[loop]\nraw_tick_rate = 0\n").unwrap();
        assert_eq!(config.tick_rate, TickRate::Raw(0.0));
        config.load_from_str("[loop]\nticks_per_refresh = 1000\n").unwrap();
        assert_eq!(config.tick_rate, TickRate::PerRefresh(1000));
    }

    #[test]
    fn load_from_file_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[window]\nheight = 480\n[loop]\nticks_per_refresh = 2\n").unwrap();

        let mut config = EngineConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.resolution, Resolution::new(800, 480));
        assert_eq!(config.tick_rate, TickRate::PerRefresh(2));
        assert_eq!(config.background, Color::WHITE);
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = EngineConfig::with_path(dir.path().join("config.ini"));
        config.background = Color::new(1, 2, 3);
        config.tick_rate = TickRate::Raw(25.0);
        config.save_to_file().unwrap();

        let mut loaded = EngineConfig::with_path(config.config_path());
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_config_error() {
        let mut config = EngineConfig::with_path("/definitely/not/here/config.ini");
        assert!(matches!(
            config.load_from_file(),
            Err(EngineError::Config(_))
        ));
    }
}
