//! Configuration for the Space Apps terminal site.
//!
//! Settings persist as `config.toml` in the platform config directory. Every
//! section falls back to defaults, so partial files are accepted, and command
//! line flags override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BackgroundConfig, Config, LogConfig, NebulaConfig, StarsConfig};
pub use error::ConfigError;
