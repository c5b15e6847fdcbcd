//! Nutrition dashboard
//!
//! Overall progress, current against target levels for the displayed list,
//! a day of meals and a week of progress. Meals and weekly values are fixed
//! sample data; only the levels follow the session.
//!
//! # Examples
//!
//! ```
//! use relevel::dashboard::Dashboard;
//! use relevel::session::Session;
//!
//! let dashboard = Dashboard::from_session(&Session::default());
//! assert!(dashboard.fallback);
//! assert_eq!(dashboard.overall_progress, 62);
//! assert_eq!(dashboard.levels[0].daily_goal, Some("2.4 µg"));
//! ```

use serde::Serialize;

use crate::session::Session;
use crate::summary::{fallback_detail, status_for, Status, Summary};

/// One planned meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meal {
    /// Meal name
    pub meal: &'static str,
    /// Time of day
    pub time: &'static str,
    /// Dishes
    pub foods: &'static [&'static str],
    /// Nutrients the dishes are rich in
    pub nutrients: &'static [&'static str],
}

/// Progress for one day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayProgress {
    /// Short day name
    pub day: &'static str,
    /// Percent of daily goals met
    pub progress: u8,
}

/// Today's meal plan
pub const DAILY_MEALS: [Meal; 3] = [
    Meal {
        meal: "Breakfast",
        time: "8:00 AM",
        foods: &["Oatmeal with berries", "Greek yogurt", "Almonds"],
        nutrients: &["Iron", "Vitamin D", "Calcium"],
    },
    Meal {
        meal: "Lunch",
        time: "12:30 PM",
        foods: &["Grilled salmon", "Quinoa salad", "Spinach"],
        nutrients: &["Vitamin B12", "Iron", "Magnesium"],
    },
    Meal {
        meal: "Dinner",
        time: "7:00 PM",
        foods: &["Lean beef", "Sweet potato", "Broccoli"],
        nutrients: &["Iron", "Vitamin B12", "Vitamin D"],
    },
];

/// Progress over the current week, Monday first
pub const WEEKLY_PROGRESS: [DayProgress; 7] = [
    DayProgress { day: "Mon", progress: 75 },
    DayProgress { day: "Tue", progress: 82 },
    DayProgress { day: "Wed", progress: 68 },
    DayProgress { day: "Thu", progress: 91 },
    DayProgress { day: "Fri", progress: 79 },
    DayProgress { day: "Sat", progress: 85 },
    DayProgress { day: "Sun", progress: 88 },
];

/// Current level of one nutrient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Display label
    pub nutrient: String,
    /// Percent of threshold
    pub progress: u8,
    /// Band of `progress`
    pub status: Status,
    /// Typical intake, known for sample entries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_intake: Option<&'static str>,
    /// Recommended daily intake, known for sample entries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_goal: Option<&'static str>,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Rounded mean progress of `levels`
    pub overall_progress: u8,
    /// Number of planned meals
    pub meals_today: usize,
    /// True when `levels` come from the sample list
    pub fallback: bool,
    /// One entry per displayed recommendation
    pub levels: Vec<Level>,
    /// Progress per weekday
    pub weekly_progress: Vec<DayProgress>,
    /// Today's meals
    pub meals: Vec<Meal>,
}

impl Dashboard {
    /// Build the dashboard for what a session would display
    pub fn from_session(session: &Session) -> Self {
        let fallback = session.recommendations().is_empty();
        let shown = session.display_recommendations();

        let levels = shown
            .iter()
            .map(|rec| {
                let detail = if fallback {
                    fallback_detail(rec.id)
                } else {
                    None
                };
                Level {
                    nutrient: rec.nutrient.clone(),
                    progress: rec.progress_percent,
                    status: status_for(rec.progress_percent),
                    current_intake: detail.map(|d| d.current_intake),
                    daily_goal: detail.map(|d| d.daily_goal),
                }
            })
            .collect();

        Self {
            overall_progress: Summary::of(&shown).average_progress,
            meals_today: DAILY_MEALS.len(),
            fallback,
            levels,
            weekly_progress: WEEKLY_PROGRESS.to_vec(),
            meals: DAILY_MEALS.to_vec(),
        }
    }
}
