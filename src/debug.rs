// Debug logging for Sumo Duel
// File-based tracing output, enabled via the --debug flag

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::Level;

/// Where debug logs go. The terminal is taken by the game screen.
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("sumo-duel-debug.log")
}

/// Initialize debug logging to file
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber is installed and
///   every `tracing` macro is a no-op
/// - If enabled=true: Creates/truncates the log file, writes a header and
///   installs a `fmt` subscriber at DEBUG level writing into it
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== Sumo Duel Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(())
}
