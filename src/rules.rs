//! Threshold rules that decide which nutrients need attention
//!
//! A [`RuleTable`] is an ordered list of [`ThresholdRule`]s. Order matters: it is
//! the order recommendations are emitted in, and it fixes their ids.
//!
//! The built-in table covers vitamin B12 (200), vitamin D (30) and iron (60).
//! Units are not part of the comparison; a threshold is compared against
//! whatever number the lab reported.

use crate::error::RelevelError;
use crate::nutrient::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reference value below which a nutrient is considered insufficient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Nutrient this rule checks
    pub nutrient: Nutrient,
    /// Strict lower bound; values below it produce a recommendation
    pub threshold: f64,
    /// Foods to suggest when the nutrient is low, in display order
    pub foods: Vec<String>,
}

impl ThresholdRule {
    /// Create a rule, validating the threshold
    ///
    /// # Examples
    ///
    /// ```
    /// use relevel::nutrient::Nutrient;
    /// use relevel::rules::ThresholdRule;
    ///
    /// let rule = ThresholdRule::new(Nutrient::Zinc, 70.0, ["Oysters", "Pumpkin seeds"])?;
    /// assert_eq!(rule.foods.len(), 2);
    ///
    /// assert!(ThresholdRule::new(Nutrient::Zinc, 0.0, ["Oysters"]).is_err());
    /// # Ok::<(), relevel::error::RelevelError>(())
    /// ```
    pub fn new<I, S>(nutrient: Nutrient, threshold: f64, foods: I) -> Result<Self, RelevelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rule = Self {
            nutrient,
            threshold,
            foods: foods.into_iter().map(Into::into).collect(),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check that the threshold can be divided by and compared against
    pub fn validate(&self) -> Result<(), RelevelError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(RelevelError::InvalidRule {
                nutrient: self.nutrient.key().to_string(),
                reason: format!(
                    "threshold must be a finite number above zero, got {}",
                    self.threshold
                ),
            });
        }
        Ok(())
    }

    /// True when `value` falls below this rule's threshold
    pub fn is_deficient(&self, value: f64) -> bool {
        value < self.threshold
    }
}

/// Ordered, validated set of threshold rules
///
/// # Examples
///
/// ```
/// use relevel::nutrient::Nutrient;
/// use relevel::rules::RuleTable;
///
/// let table = RuleTable::default();
/// let nutrients: Vec<_> = table.iter().map(|r| r.nutrient).collect();
/// assert_eq!(nutrients, [Nutrient::VitaminB12, Nutrient::VitaminD, Nutrient::Iron]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleTable {
    rules: Vec<ThresholdRule>,
}

impl RuleTable {
    /// Build a table, rejecting invalid thresholds and repeated nutrients
    pub fn new(rules: Vec<ThresholdRule>) -> Result<Self, RelevelError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.nutrient) {
                return Err(RelevelError::DuplicateRule {
                    nutrient: rule.nutrient.key().to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Built-in table followed by `extra` rules
    pub fn with_extra(extra: Vec<ThresholdRule>) -> Result<Self, RelevelError> {
        let mut rules = default_rules();
        rules.extend(extra);
        Self::new(rules)
    }

    /// Rules in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, ThresholdRule> {
        self.rules.iter()
    }

    /// Rule for a nutrient, if the table has one
    pub fn get(&self, nutrient: Nutrient) -> Option<&ThresholdRule> {
        self.rules.iter().find(|r| r.nutrient == nutrient)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Nutrients the lab form offers that no rule covers
    pub fn uncovered(&self) -> Vec<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|n| self.get(*n).is_none())
            .collect()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

fn rule(nutrient: Nutrient, threshold: f64, foods: &[&str]) -> ThresholdRule {
    ThresholdRule {
        nutrient,
        threshold,
        foods: foods.iter().map(|f| f.to_string()).collect(),
    }
}

/// The built-in rules, in evaluation order
pub fn default_rules() -> Vec<ThresholdRule> {
    vec![
        rule(
            Nutrient::VitaminB12,
            200.0,
            &["Salmon", "Tuna", "Eggs", "Dairy products"],
        ),
        rule(
            Nutrient::VitaminD,
            30.0,
            &["Fatty fish", "Egg yolks", "Fortified milk", "Mushrooms"],
        ),
        rule(
            Nutrient::Iron,
            60.0,
            &["Red meat", "Spinach", "Legumes", "Nuts"],
        ),
    ]
}
