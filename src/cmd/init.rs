//! Init command implementation
//!
//! Handles the `relevel init` command which writes a `.relevel.toml` spelling
//! out the built-in rules, ready to be edited.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::error::RelevelError;
use crate::fmt::{CHECKMARK, SPARKLES};

/// Create `.relevel.toml` in the current directory
///
/// # Examples
///
/// ```no_run
/// use relevel::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{} Next Steps:", SPARKLES);
    println!("   1. Adjust thresholds or add [[rules]] for other nutrients");
    println!(
        "   2. Run {} to see recommendations",
        style("relevel recommend --set vitaminD=18").cyan()
    );
    Ok(())
}

/// Write the starter config into `project_root`, refusing to overwrite
pub fn init_in(project_root: &Path) -> Result<()> {
    if ConfigLoader::exists(project_root) {
        return Err(RelevelError::ConfigExists {
            path: project_root.join(CONFIG_FILE_NAME),
        }
        .into());
    }

    ConfigLoader::save(&ConfigFile::starter(), project_root)
}
