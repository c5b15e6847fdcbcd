//! Configuration management for relevel
//!
//! This module provides:
//! - .relevel.toml config file support
//! - Rule table customization (extra rules or a full replacement)
//! - Missing-reading policy selection

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
