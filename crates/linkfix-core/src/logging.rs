//! Logging init: file under the XDG state dir when writable, stderr otherwise.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Opens `~/.local/state/linkfix/linkfix.log` for appending. Any failure
/// (missing HOME, unwritable dir) is reported so init can fall back.
fn open_log_file() -> anyhow::Result<(PathBuf, fs::File)> {
    let state_home = xdg::BaseDirectories::with_prefix("linkfix")?.get_state_home();
    fs::create_dir_all(&state_home)?;
    let path = state_home.join("linkfix.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Initialize structured logging. Prefers a log file under the XDG state dir;
/// if that is unavailable, logs to stderr instead of failing. Honors
/// `RUST_LOG`, defaulting to `info,linkfix=debug`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,linkfix=debug"));

    let (writer, file_path) = match open_log_file() {
        Ok((path, file)) => (BoxMakeWriter::new(Arc::new(file)), Some(path)),
        Err(_) => (BoxMakeWriter::new(std::io::stderr), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    match file_path {
        Some(path) => tracing::info!("linkfix logging initialized at {}", path.display()),
        None => tracing::warn!("state dir unavailable, logging to stderr"),
    }
}
