//! Delay line configuration
//!
//! - Generic YAML config loading/saving
//! - Config file location
//! - Delay line sizing ([`DelayLineConfig`])
//!
//! # Usage
//!
//! ```ignore
//! use ringdelay_core::config::{default_config_path, load_config, DelayLineConfig};
//!
//! let config: DelayLineConfig = load_config(&default_config_path("delay.yaml"));
//! let capacity = config.capacity_samples();
//! ```

mod delay;
mod io;
mod paths;

pub use delay::DelayLineConfig;
pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path};
