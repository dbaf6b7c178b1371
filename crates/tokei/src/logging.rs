//! Log setup.
//!
//! The terminal belongs to the clock, so log output goes to a file in the
//! cache directory. `RUST_LOG` controls the filter (default `warn`).

use std::fs::{self, OpenOptions};

use env_logger::{Env, Target};

/// Route `log` output to the log file. Logging stays off if the file cannot
/// be opened.
pub fn init() {
    let Some(path) = tokei_config::log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    log::debug!("logging to {}", path.display());
}
