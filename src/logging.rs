//! Debug-build logging
//!
//! The terminal belongs to the TUI, so log records go to a file in the
//! temp directory. Release builds install no logger and `log` macros are
//! no-ops.

use std::path::PathBuf;

pub const LOG_ENV: &str = "QADESK_LOG";
const LOG_FILE: &str = "qadesk.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    let Ok(file) = File::create(log_path()) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
