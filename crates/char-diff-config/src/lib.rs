//! Configuration for char-diff
//!
//! This crate provides:
//! - Config file discovery (`.char-diff.toml` in the working directory, then home)
//! - `DiffConfig`: indent width, output preset and style token overrides
//! - `ConfiguredHandler`: the handler a config describes, ready to pass to the engine

pub mod config_file;
pub mod diff_config;
pub mod handler;

pub use config_file::load_config_file;
pub use diff_config::{ConfigError, DiffConfig, Preset, StyleOverrides};
pub use handler::ConfiguredHandler;
