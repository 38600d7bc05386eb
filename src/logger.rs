//! Logging setup.
//!
//! Every record goes to stderr and to `logs/<unix-seconds>.log`, one line
//! each, formatted `timestamp - LEVEL - message`.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub const LOG_DIR: &str = "logs";

/// Writes everything to stderr and, when present, a log file.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Path of the log file for a session started now.
pub fn log_file_path(dir: &Path) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    dir.join(format!("{secs}.log"))
}

fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    File::create(log_file_path(dir))
}

/// Install the global logger. `RUST_LOG` overrides `level` when set.
///
/// If the log file cannot be created, logging continues on stderr only.
pub fn init(level: LevelFilter) {
    let file = match open_log_file(Path::new(LOG_DIR)) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Could not create log file in {LOG_DIR}: {e}");
            None
        }
    };

    let default_filter = level.to_string().to_lowercase();
    let result = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(Tee { file })))
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialised: {e}");
    }
}
