mod config;
pub mod database;
pub mod migrations;

pub use config::Config;
pub use database::HabitDb;

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `HABITFORGE_DATA_DIR` overrides the location outright. Otherwise
/// `~/.config/habitforge[-dev]/` is used, with the `-dev` suffix selected by
/// `HABITFORGE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("HABITFORGE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITFORGE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitforge-dev")
            } else {
                base_dir.join("habitforge")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
