//! Command handlers for relevel CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod dashboard;
pub mod display;
pub mod init;
pub mod recommend;
pub mod rules;
pub mod submit;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use dashboard::cmd_dashboard;
pub use init::cmd_init;
pub use recommend::cmd_recommend;
pub use rules::{cmd_nutrients, cmd_rules};
pub use submit::cmd_submit;
