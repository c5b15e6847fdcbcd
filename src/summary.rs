//! Display-side views of a recommendation list
//!
//! Status banding, the headline numbers shown above the list, and the sample
//! list shown when there is nothing to display yet. Sample entries carry a
//! short explanation with a daily goal and a typical current intake.

use crate::recommend::Recommendation;
use serde::Serialize;

/// Coarse status for a progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Status {
    /// Under 50% of threshold
    Low,
    /// 50% up to 80%
    Moderate,
    /// 80% and above
    Optimal,
}

impl Status {
    /// Label shown next to a recommendation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Optimal => "Optimal",
        }
    }
}

/// Band a progress percentage
///
/// # Examples
///
/// ```
/// use relevel::summary::{status_for, Status};
///
/// assert_eq!(status_for(49), Status::Low);
/// assert_eq!(status_for(50), Status::Moderate);
/// assert_eq!(status_for(80), Status::Optimal);
/// ```
pub fn status_for(progress_percent: u8) -> Status {
    match progress_percent {
        0..=49 => Status::Low,
        50..=79 => Status::Moderate,
        _ => Status::Optimal,
    }
}

/// Headline numbers for a recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of nutrients to focus on
    pub focus_areas: usize,
    /// Mean progress, rounded; 0 for an empty list
    pub average_progress: u8,
    /// Total number of food suggestions across the list
    pub food_suggestions: usize,
}

impl Summary {
    /// Summarize a list of recommendations
    pub fn of(recommendations: &[Recommendation]) -> Self {
        let focus_areas = recommendations.len();
        let average_progress = if focus_areas == 0 {
            0
        } else {
            let total: u32 = recommendations
                .iter()
                .map(|r| u32::from(r.progress_percent))
                .sum();
            (f64::from(total) / focus_areas as f64).round() as u8
        };

        Self {
            focus_areas,
            average_progress,
            food_suggestions: recommendations.iter().map(|r| r.foods.len()).sum(),
        }
    }
}

/// Explanation shown with a sample recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackDetail {
    /// What the sample level means and where to start
    pub description: &'static str,
    /// Recommended daily intake
    pub daily_goal: &'static str,
    /// Typical intake at this level
    pub current_intake: &'static str,
}

/// One entry of the sample list
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackEntry {
    /// The sample record
    pub recommendation: Recommendation,
    /// Its explanation
    pub detail: FallbackDetail,
}

fn sample(
    id: u32,
    nutrient: &str,
    foods: &[&str],
    progress_percent: u8,
    detail: FallbackDetail,
) -> FallbackEntry {
    FallbackEntry {
        recommendation: Recommendation {
            id,
            nutrient: nutrient.to_string(),
            foods: foods.iter().map(|f| f.to_string()).collect(),
            progress_percent,
        },
        detail,
    }
}

/// Sample list with explanations, in display order
pub fn fallback_entries() -> Vec<FallbackEntry> {
    vec![
        sample(
            1,
            "Vitamin B12",
            &["Salmon", "Tuna", "Eggs", "Dairy products", "Fortified cereals"],
            65,
            FallbackDetail {
                description: "Your Vitamin B12 levels are below optimal. \
                    Focus on animal-based foods and fortified products.",
                daily_goal: "2.4 µg",
                current_intake: "1.6 µg",
            },
        ),
        sample(
            2,
            "Vitamin D",
            &["Fatty fish", "Egg yolks", "Fortified milk", "Mushrooms", "Sunlight exposure"],
            45,
            FallbackDetail {
                description: "Vitamin D deficiency detected. \
                    Increase fatty fish intake and consider safe sun exposure.",
                daily_goal: "600 IU",
                current_intake: "270 IU",
            },
        ),
        sample(
            3,
            "Iron",
            &["Red meat", "Spinach", "Legumes", "Nuts", "Dark chocolate"],
            75,
            FallbackDetail {
                description: "Iron levels are improving \
                    but could be optimized with more iron-rich foods.",
                daily_goal: "18 mg",
                current_intake: "13.5 mg",
            },
        ),
    ]
}

/// Sample list shown before any lab values have been submitted
pub fn fallback_recommendations() -> Vec<Recommendation> {
    fallback_entries()
        .into_iter()
        .map(|entry| entry.recommendation)
        .collect()
}

/// Explanation for a sample recommendation, matched by id
pub fn fallback_detail(id: u32) -> Option<FallbackDetail> {
    fallback_entries()
        .into_iter()
        .find(|entry| entry.recommendation.id == id)
        .map(|entry| entry.detail)
}

/// The list to render: `recommendations` itself, or the fallback when it is empty
pub fn display_list(recommendations: &[Recommendation]) -> Vec<Recommendation> {
    if recommendations.is_empty() {
        fallback_recommendations()
    } else {
        recommendations.to_vec()
    }
}
