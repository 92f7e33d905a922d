use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::WriteLogger;

use crate::config::Config;
use crate::error::AppError;
use crate::paths;

/// Send `log` output to a file; the terminal belongs to the UI.
///
/// Without `--log-file` the previous run's log in the cache directory is
/// rotated first. Returns the path being written.
pub fn init(config: &Config) -> Result<PathBuf, AppError> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => {
            paths::rotate_logs();
            paths::log_file().ok_or(AppError::NoLogDir)?
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(config.log_level.into(), simplelog::Config::default(), file)?;

    Ok(path)
}
