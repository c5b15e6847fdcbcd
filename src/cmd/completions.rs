//! Completions command implementation
//!
//! Handles the `relevel completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// # Bash
/// relevel completions bash > /etc/bash_completion.d/relevel
///
/// # Zsh
/// relevel completions zsh > ~/.zfunc/_relevel
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut clap::Command) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, &mut std::io::stdout());
}
