//! Recommend command implementation
//!
//! Handles `relevel recommend`, which evaluates any number of `nutrient=value`
//! readings against the active rule table.

use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use crate::cmd::display::{print_session, print_session_json};
use crate::config::ConfigLoader;
use crate::reading::{parse_assignment, NutrientReading};
use crate::recommend::MissingReadingPolicy;
use crate::session::Session;

/// Build a session from `.relevel.toml` in `project_root`
///
/// `skip_missing` forces [`MissingReadingPolicy::Skip`] regardless of config.
pub fn load_session(project_root: &Path, skip_missing: bool) -> Result<Session> {
    let config = ConfigLoader::load(project_root)?;
    let rules = config.rule_table()?;
    let policy = if skip_missing {
        MissingReadingPolicy::Skip
    } else {
        config.missing_readings
    };
    Ok(Session::new(rules, policy))
}

/// Parse `nutrient=value` arguments and submit them to a session for the
/// current directory
pub fn evaluate(assignments: &[String], skip_missing: bool) -> Result<Session> {
    let pairs = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to parse readings")?;
    let reading = NutrientReading::from_pairs(pairs).context("Failed to parse readings")?;

    let project_root = env::current_dir()?;
    let mut session = load_session(&project_root, skip_missing)?;
    session.submit(reading);
    Ok(session)
}

/// Evaluate readings and print recommendations
///
/// # Examples
///
/// ```no_run
/// use relevel::cmd::recommend::cmd_recommend;
///
/// let readings = vec!["vitaminB12=150".to_string(), "iron=70".to_string()];
/// cmd_recommend(&readings, false, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_recommend(assignments: &[String], skip_missing: bool, json: bool) -> Result<()> {
    let session = evaluate(assignments, skip_missing)?;

    if json {
        print_session_json(&session)
    } else {
        print_session(&session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, CONFIG_FILE_NAME};
    use tempfile::TempDir;

    #[test]
    fn test_load_session_without_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let session = load_session(temp_dir.path(), false).unwrap();
        assert_eq!(session.rules().len(), 3);
        assert_eq!(session.policy(), MissingReadingPolicy::AssumeZero);
    }

    #[test]
    fn test_load_session_skip_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        ConfigLoader::save(&ConfigFile::starter(), temp_dir.path()).unwrap();

        let session = load_session(temp_dir.path(), true).unwrap();
        assert_eq!(session.policy(), MissingReadingPolicy::Skip);
    }

    #[test]
    fn test_load_session_propagates_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[[rules]]\nnutrient = \"zinc\"\nthreshold = 0\nfoods = []\n",
        )
        .unwrap();

        assert!(load_session(temp_dir.path(), false).is_err());
    }
}
