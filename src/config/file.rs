//! Configuration file data structures

use crate::error::RelevelError;
use crate::recommend::MissingReadingPolicy;
use crate::rules::{default_rules, RuleTable, ThresholdRule};
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".relevel.toml";

/// relevel configuration file structure
///
/// # Examples
///
/// ```
/// use relevel::config::ConfigFile;
///
/// let config: ConfigFile = toml_edit::de::from_str(r#"
/// missing-readings = "skip"
///
/// [[rules]]
/// nutrient = "zinc"
/// threshold = 70
/// foods = ["Oysters", "Pumpkin seeds"]
/// "#).unwrap();
///
/// let table = config.rule_table().unwrap();
/// assert_eq!(table.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// How rules without a measurement are treated
    #[serde(default)]
    pub missing_readings: MissingReadingPolicy,

    /// Use only `rules`, dropping the built-in table
    #[serde(default)]
    pub replace_default_rules: bool,

    /// Extra rules, evaluated after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ThresholdRule>,
}

impl ConfigFile {
    /// Config that spells out the built-in rules so they can be edited in place
    pub fn starter() -> Self {
        Self {
            missing_readings: MissingReadingPolicy::default(),
            replace_default_rules: true,
            rules: default_rules(),
        }
    }

    /// Build the rule table this config describes
    pub fn rule_table(&self) -> Result<RuleTable, RelevelError> {
        if self.replace_default_rules {
            RuleTable::new(self.rules.clone())
        } else {
            RuleTable::with_extra(self.rules.clone())
        }
    }
}
