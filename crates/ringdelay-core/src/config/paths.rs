//! Path utilities for ringdelay configuration files

use std::path::PathBuf;

/// Get the directory holding ringdelay configuration
///
/// Returns: `<user config dir>/ringdelay`, or `./ringdelay` when the platform
/// has no config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ringdelay")
}

/// Get the default path for a config file
///
/// # Arguments
/// * `filename` - Config file name (e.g., "delay.yaml")
pub fn default_config_path(filename: &str) -> PathBuf {
    default_config_dir().join(filename)
}
