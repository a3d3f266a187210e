use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TUIMAN_LOG";

/// `<data dir>/tuiman/tuiman.log`. The terminal belongs to the UI, so logs go to a file.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("tuiman").join("tuiman.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

/// Installs the global subscriber. Filter comes from `TUIMAN_LOG`, default `info`.
/// If the log file cannot be opened, events are discarded.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    let result = match open_log_file() {
        Some(file) => builder.with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(std::io::sink).try_init(),
    };
    if result.is_err() {
        // A subscriber is already installed (tests); keep it.
        return;
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tuiman starting");
}
