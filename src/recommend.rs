//! Recommendation derivation
//!
//! Turns a [`NutrientReading`] into the list of nutrients that fall below their
//! threshold. Derivation is a pure function of the reading, the rule table and
//! the missing-reading policy: same inputs, same output, no hidden state.
//!
//! # Examples
//!
//! ```
//! use relevel::nutrient::Nutrient;
//! use relevel::reading::NutrientReading;
//! use relevel::recommend::derive;
//!
//! let reading = NutrientReading::from_pairs([
//!     (Nutrient::VitaminB12, 150.0),
//!     (Nutrient::VitaminD, 45.0),
//!     (Nutrient::Iron, 30.0),
//! ])?;
//!
//! let recs = derive(&reading);
//! assert_eq!(recs.len(), 2);
//! assert_eq!(recs[0].nutrient, "Vitamin B12");
//! assert_eq!(recs[0].progress_percent, 75);
//! assert_eq!(recs[1].nutrient, "Iron");
//! assert_eq!(recs[1].progress_percent, 50);
//! # Ok::<(), relevel::error::RelevelError>(())
//! ```

use crate::reading::NutrientReading;
use crate::rules::{RuleTable, ThresholdRule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with a rule whose nutrient has no measurement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingReadingPolicy {
    /// Treat the missing value as 0, which always yields a 0% recommendation
    #[default]
    AssumeZero,
    /// Do not evaluate the rule at all
    Skip,
}

impl MissingReadingPolicy {
    /// Config-file spelling
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssumeZero => "assume-zero",
            Self::Skip => "skip",
        }
    }
}

impl FromStr for MissingReadingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assume-zero" => Ok(Self::AssumeZero),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("Unknown missing-reading policy: {}", s)),
        }
    }
}

impl fmt::Display for MissingReadingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A nutrient below its threshold, with foods to help close the gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position of the originating rule in the rule table
    pub id: u32,
    /// Display name of the nutrient
    pub nutrient: String,
    /// Suggested foods, in rule order
    pub foods: Vec<String>,
    /// Measurement as a share of the threshold, 0..=100
    #[serde(rename = "progress")]
    pub progress_percent: u8,
}

/// Derive recommendations with the built-in rules, treating missing readings as 0
pub fn derive(reading: &NutrientReading) -> Vec<Recommendation> {
    derive_with(reading, &RuleTable::default(), MissingReadingPolicy::default())
}

/// Derive recommendations against an explicit rule table and policy
///
/// Rules are visited in table order and a recommendation is emitted exactly
/// when the measurement is strictly below the rule's threshold.
pub fn derive_with(
    reading: &NutrientReading,
    rules: &RuleTable,
    policy: MissingReadingPolicy,
) -> Vec<Recommendation> {
    let recommendations: Vec<Recommendation> = rules
        .iter()
        .enumerate()
        .filter_map(|(index, rule)| {
            let value = match (reading.get(rule.nutrient), policy) {
                (Some(value), _) => value,
                (None, MissingReadingPolicy::AssumeZero) => 0.0,
                (None, MissingReadingPolicy::Skip) => return None,
            };

            if !rule.is_deficient(value) {
                return None;
            }

            Some(Recommendation {
                id: index as u32 + 1,
                nutrient: rule.nutrient.label().to_string(),
                foods: rule.foods.clone(),
                progress_percent: progress_percent(value, rule),
            })
        })
        .collect();

    log::debug!(
        "derived {} recommendation(s) from {} reading(s) against {} rule(s) ({})",
        recommendations.len(),
        reading.len(),
        rules.len(),
        policy
    );

    recommendations
}

/// `min(100, round(value / threshold * 100))`, never below 0
pub fn progress_percent(value: f64, rule: &ThresholdRule) -> u8 {
    let percent = (value / rule.threshold * 100.0).round();
    // NaN cannot reach here: readings and thresholds are validated on construction.
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrient::Nutrient;

    fn single(nutrient: Nutrient, value: f64) -> NutrientReading {
        NutrientReading::single(nutrient, value).unwrap()
    }

    fn b12_only() -> RuleTable {
        RuleTable::new(vec![ThresholdRule::new(
            Nutrient::VitaminB12,
            200.0,
            ["Salmon"],
        )
        .unwrap()])
        .unwrap()
    }

    #[test]
    fn test_value_below_threshold_produces_recommendation_with_progress() {
        let recs = derive_with(
            &single(Nutrient::VitaminB12, 150.0),
            &b12_only(),
            MissingReadingPolicy::AssumeZero,
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].progress_percent, 75);
        assert_eq!(recs[0].id, 1);
        assert_eq!(recs[0].foods, ["Salmon"]);
    }

    #[test]
    fn test_value_above_threshold_produces_nothing() {
        let recs = derive_with(
            &single(Nutrient::VitaminB12, 250.0),
            &b12_only(),
            MissingReadingPolicy::AssumeZero,
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_value_at_threshold_produces_nothing() {
        let recs = derive(&single(Nutrient::VitaminD, 30.0));
        assert!(recs.iter().all(|r| r.nutrient != "Vitamin D"));
    }

    #[test]
    fn test_empty_reading_recommends_every_rule_at_zero() {
        let recs = derive(&NutrientReading::new());
        let ids: Vec<u32> = recs.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(recs.iter().all(|r| r.progress_percent == 0));
    }

    #[test]
    fn test_skip_policy_ignores_missing_readings() {
        let recs = derive_with(
            &single(Nutrient::Iron, 15.0),
            &RuleTable::default(),
            MissingReadingPolicy::Skip,
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].nutrient, "Iron");
        assert_eq!(recs[0].id, 3);
        assert_eq!(recs[0].progress_percent, 25);
    }

    #[test]
    fn test_single_key_submission_keeps_rule_order() {
        // A form submission only carries one nutrient; the others default to 0.
        let recs = derive(&single(Nutrient::VitaminD, 20.0));
        let names: Vec<&str> = recs.iter().map(|r| r.nutrient.as_str()).collect();
        assert_eq!(names, ["Vitamin B12", "Vitamin D", "Iron"]);
        assert_eq!(recs[1].progress_percent, 67);
    }

    #[test]
    fn test_readings_without_rules_are_ignored() {
        let reading =
            NutrientReading::from_pairs([(Nutrient::Calcium, 1.0), (Nutrient::VitaminB12, 500.0)])
                .unwrap();
        let recs = derive_with(&reading, &b12_only(), MissingReadingPolicy::AssumeZero);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_progress_rounds_half_away_from_zero() {
        let rule = ThresholdRule::new(Nutrient::Iron, 8.0, ["Nuts"]).unwrap();
        assert_eq!(progress_percent(3.0, &rule), 38); // 37.5%
        assert_eq!(progress_percent(1.0, &rule), 13); // 12.5%
        assert_eq!(progress_percent(0.02, &rule), 0); // 0.25%
    }

    #[test]
    fn test_progress_clamps_at_hundred() {
        let rule = ThresholdRule::new(Nutrient::Iron, 60.0, ["Nuts"]).unwrap();
        assert_eq!(progress_percent(6000.0, &rule), 100);
    }

    #[test]
    fn test_serializes_progress_under_display_name() {
        let rec = &derive(&NutrientReading::new())[0];
        let json = serde_json::to_value(rec).unwrap();
        assert_eq!(json["progress"], 0);
        assert_eq!(json["nutrient"], "Vitamin B12");
    }

    #[test]
    fn test_policy_parses_config_spelling() {
        assert_eq!("skip".parse(), Ok(MissingReadingPolicy::Skip));
        assert_eq!("Assume-Zero".parse(), Ok(MissingReadingPolicy::AssumeZero));
        assert!("ignore".parse::<MissingReadingPolicy>().is_err());
    }

    use proptest::prelude::*;

    proptest! {
        /// Property: a recommendation exists iff the value is below the threshold
        #[test]
        fn prop_recommendation_iff_below_threshold(
            threshold in 0.001f64..10_000.0,
            value in 0.0f64..20_000.0
        ) {
            let rules = RuleTable::new(vec![
                ThresholdRule::new(Nutrient::Selenium, threshold, ["Brazil nuts"]).unwrap(),
            ]).unwrap();
            let recs = derive_with(
                &single(Nutrient::Selenium, value),
                &rules,
                MissingReadingPolicy::AssumeZero,
            );
            prop_assert_eq!(recs.len() == 1, value < threshold);
        }

        /// Property: progress always lands in 0..=100
        #[test]
        fn prop_progress_is_clamped(
            threshold in 0.001f64..10_000.0,
            value in 0.0f64..1e12
        ) {
            let rule = ThresholdRule::new(Nutrient::Zinc, threshold, ["Oysters"]).unwrap();
            prop_assert!(progress_percent(value, &rule) <= 100);
        }

        /// Property: derivation is deterministic
        #[test]
        fn prop_derive_is_idempotent(
            b12 in proptest::option::of(0.0f64..400.0),
            d in proptest::option::of(0.0f64..60.0),
            iron in proptest::option::of(0.0f64..120.0)
        ) {
            let pairs = [
                (Nutrient::VitaminB12, b12),
                (Nutrient::VitaminD, d),
                (Nutrient::Iron, iron),
            ];
            let reading = NutrientReading::from_pairs(
                pairs.into_iter().filter_map(|(n, v)| v.map(|v| (n, v))),
            ).unwrap();
            prop_assert_eq!(derive(&reading), derive(&reading));
        }
    }
}
