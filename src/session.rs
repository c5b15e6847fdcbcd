//! Per-user session state
//!
//! Holds the latest submitted reading and the recommendations derived from it.
//! Each submission replaces both wholesale; readings are never merged.

use crate::reading::NutrientReading;
use crate::recommend::{derive_with, MissingReadingPolicy, Recommendation};
use crate::rules::RuleTable;
use crate::summary::{display_list, Summary};

/// Latest reading and its recommendations
///
/// # Examples
///
/// ```
/// use relevel::nutrient::Nutrient;
/// use relevel::reading::NutrientReading;
/// use relevel::session::Session;
///
/// let mut session = Session::default();
/// assert!(session.recommendations().is_empty());
///
/// session.submit(NutrientReading::single(Nutrient::Iron, 30.0)?);
/// assert_eq!(session.recommendations().len(), 3);
///
/// session.submit(NutrientReading::single(Nutrient::Iron, 90.0)?);
/// assert_eq!(session.recommendations().len(), 2);
/// # Ok::<(), relevel::error::RelevelError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    rules: RuleTable,
    policy: MissingReadingPolicy,
    reading: NutrientReading,
    recommendations: Vec<Recommendation>,
}

impl Session {
    /// Session evaluating readings against `rules` with `policy`
    pub fn new(rules: RuleTable, policy: MissingReadingPolicy) -> Self {
        Self {
            rules,
            policy,
            reading: NutrientReading::new(),
            recommendations: Vec::new(),
        }
    }

    /// Replace the reading and recompute recommendations
    pub fn submit(&mut self, reading: NutrientReading) -> &[Recommendation] {
        let recommendations = derive_with(&reading, &self.rules, self.policy);
        self.reading = reading;
        self.recommendations = recommendations;
        &self.recommendations
    }

    /// Latest submitted reading; empty before the first submission
    pub fn reading(&self) -> &NutrientReading {
        &self.reading
    }

    /// Recommendations for the latest reading
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Recommendations to render, falling back to the sample list when empty
    pub fn display_recommendations(&self) -> Vec<Recommendation> {
        display_list(&self.recommendations)
    }

    /// Headline numbers for what is rendered
    pub fn summary(&self) -> Summary {
        Summary::of(&self.display_recommendations())
    }

    /// Active rule table
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Active missing-reading policy
    pub fn policy(&self) -> MissingReadingPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrient::Nutrient;
    use crate::summary::fallback_recommendations;

    #[test]
    fn test_submit_replaces_previous_reading() {
        let mut session = Session::default();
        session.submit(NutrientReading::single(Nutrient::Iron, 10.0).unwrap());
        session.submit(NutrientReading::single(Nutrient::VitaminD, 10.0).unwrap());

        assert_eq!(session.reading().get(Nutrient::Iron), None);
        assert_eq!(session.reading().get(Nutrient::VitaminD), Some(10.0));
        let iron = session
            .recommendations()
            .iter()
            .find(|r| r.nutrient == "Iron")
            .unwrap();
        assert_eq!(iron.progress_percent, 0);
    }

    #[test]
    fn test_display_falls_back_when_nothing_is_low() {
        let mut session = Session::new(RuleTable::default(), MissingReadingPolicy::Skip);
        session.submit(NutrientReading::single(Nutrient::VitaminB12, 900.0).unwrap());

        assert!(session.recommendations().is_empty());
        assert_eq!(session.display_recommendations(), fallback_recommendations());
        assert_eq!(session.summary().focus_areas, 3);
    }

    #[test]
    fn test_summary_reflects_derived_list() {
        let mut session = Session::new(RuleTable::default(), MissingReadingPolicy::Skip);
        session.submit(NutrientReading::single(Nutrient::VitaminB12, 150.0).unwrap());

        let summary = session.summary();
        assert_eq!(summary.focus_areas, 1);
        assert_eq!(summary.average_progress, 75);
        assert_eq!(summary.food_suggestions, 4);
    }
}
