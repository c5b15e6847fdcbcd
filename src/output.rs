//! JSON output formatting for scripting and front-ends

use crate::nutrient::Nutrient;
use crate::reading::NutrientReading;
use crate::recommend::{MissingReadingPolicy, Recommendation};
use crate::rules::{RuleTable, ThresholdRule};
use crate::session::Session;
use crate::summary::{fallback_detail, status_for, FallbackDetail, Summary};
use serde::Serialize;

/// Recommendation plus its display status
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationInfo {
    /// The derived record
    #[serde(flatten)]
    pub recommendation: Recommendation,
    /// "Low", "Moderate" or "Optimal"
    pub status: &'static str,
    /// Explanation, present on sample entries only
    #[serde(flatten)]
    pub detail: Option<FallbackDetail>,
}

impl From<Recommendation> for RecommendationInfo {
    fn from(recommendation: Recommendation) -> Self {
        let status = status_for(recommendation.progress_percent).as_str();
        Self {
            recommendation,
            status,
            detail: None,
        }
    }
}

impl RecommendationInfo {
    /// Sample entry with its explanation attached
    pub fn fallback(recommendation: Recommendation) -> Self {
        let detail = fallback_detail(recommendation.id);
        Self {
            detail,
            ..Self::from(recommendation)
        }
    }
}

/// Output of `relevel recommend --json` and `relevel submit --json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonOutput {
    /// Policy used for rules without a measurement
    pub missing_readings: MissingReadingPolicy,
    /// Measurements that were evaluated
    pub readings: NutrientReading,
    /// True when `recommendations` is the sample list because nothing was low
    pub fallback: bool,
    /// Recommendations to display
    pub recommendations: Vec<RecommendationInfo>,
    /// Headline numbers for `recommendations`
    pub summary: Summary,
}

impl JsonOutput {
    /// Snapshot a session for output
    pub fn from_session(session: &Session) -> Self {
        let shown = session.display_recommendations();
        let fallback = session.recommendations().is_empty();
        Self {
            missing_readings: session.policy(),
            readings: session.reading().clone(),
            fallback,
            summary: Summary::of(&shown),
            recommendations: shown
                .into_iter()
                .map(|rec| {
                    if fallback {
                        RecommendationInfo::fallback(rec)
                    } else {
                        RecommendationInfo::from(rec)
                    }
                })
                .collect(),
        }
    }
}

/// Output of `relevel rules --json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesOutput<'a> {
    /// Rules in evaluation order
    pub rules: Vec<&'a ThresholdRule>,
    /// Nutrients no rule covers
    pub uncovered: Vec<Nutrient>,
}

impl<'a> RulesOutput<'a> {
    /// Describe a rule table
    pub fn new(table: &'a RuleTable) -> Self {
        Self {
            rules: table.iter().collect(),
            uncovered: table.uncovered(),
        }
    }
}
