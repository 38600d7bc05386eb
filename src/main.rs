//! tickbox2d demo entry point.
//!
//! Loads `config.ini`, opens a raylib window (or the in-memory headless
//! platform with `--headless`), builds the demo scene and runs the loop until
//! the window is closed.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run -- --headless --ticks 120 --tick-rate 60
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info, warn};

use tickbox2d::engine::{Engine, LoopExit};
use tickbox2d::error::{EngineError, EngineResult};
use tickbox2d::game;
use tickbox2d::geometry::Color;
use tickbox2d::logger;
use tickbox2d::platform::Platform;
use tickbox2d::platform::headless::HeadlessPlatform;
use tickbox2d::resources::engineconfig::EngineConfig;
use tickbox2d::resources::tickclock::TickRate;

/// A tiny tick-driven 2D engine.
#[derive(Parser)]
#[command(version, about = "Runs the tickbox2d demo scene")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Use the in-memory platform instead of opening a window.
    #[arg(long)]
    headless: bool,

    /// With --headless, quit after this many frames (at least 1).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    ticks: Option<u64>,

    /// Fixed tick rate in Hz, overriding the configured rate. 0 runs unthrottled.
    #[arg(long, value_name = "HZ", value_parser = parse_tick_rate)]
    tick_rate: Option<f32>,

    /// Background colour as R,G,B.
    #[arg(long, value_name = "R,G,B", value_parser = parse_color)]
    background: Option<Color>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match channels.as_slice() {
        [r, g, b] => Ok(Color::new(*r, *g, *b)),
        _ => Err(format!("expected R,G,B, got {s:?}")),
    }
}

fn parse_tick_rate(s: &str) -> Result<f32, String> {
    let hz: f32 = s.trim().parse().map_err(|e| format!("{s:?}: {e}"))?;
    if hz == 0.0 || (hz.is_finite() && hz >= f32::MIN_POSITIVE) {
        Ok(hz)
    } else {
        Err(format!("expected 0 or a positive rate, got {s:?}"))
    }
}

fn load_config(cli: &Cli) -> EngineConfig {
    let mut config = EngineConfig::with_path(&cli.config);
    if cli.config.exists() {
        if let Err(e) = config.load_from_file() {
            warn!("{e}; using defaults");
            config = EngineConfig::with_path(&cli.config);
        }
    } else {
        info!("No config at {:?}; using defaults", cli.config);
    }

    if let Some(hz) = cli.tick_rate {
        config.tick_rate = TickRate::Raw(hz);
    }
    if let Some(color) = cli.background {
        config.background = color;
    }
    config
}

fn run_with<P: Platform>(platform: P, config: &EngineConfig) -> EngineResult<LoopExit> {
    let mut engine = Engine::new(platform, config);
    game::setup(&mut engine);
    engine.run()
}

fn run_headless(cli: &Cli, config: &EngineConfig) -> EngineResult<LoopExit> {
    let mut platform = HeadlessPlatform::new(config.resolution);
    if let Some(ticks) = cli.ticks {
        platform = platform.quit_after(ticks);
    }
    run_with(platform, config)
}

#[cfg(all(feature = "raylib", any(target_os = "linux", target_os = "windows")))]
fn run_windowed(config: &EngineConfig) -> EngineResult<LoopExit> {
    use tickbox2d::platform::raylib_window::RaylibPlatform;

    let platform = RaylibPlatform::open(config.resolution, "tickbox2d");
    run_with(platform, config)
}

#[cfg(not(all(feature = "raylib", any(target_os = "linux", target_os = "windows"))))]
fn run_windowed(_config: &EngineConfig) -> EngineResult<LoopExit> {
    Err(EngineError::Backend(
        "built without a window backend; use --headless".to_string(),
    ))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let config = load_config(&cli);

    let result = if cli.headless {
        run_headless(&cli, &config)
    } else {
        run_windowed(&config)
    };

    match result {
        Ok(LoopExit::QuitRequested) => {
            info!("Quit requested, exiting");
            ExitCode::SUCCESS
        }
        Ok(LoopExit::Stopped) => {
            info!("Engine stopped");
            ExitCode::SUCCESS
        }
        Err(e @ EngineError::Backend(_)) => {
            error!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
