//! Lab report form model and validation
//!
//! The form collects one nutrient measurement at a time together with the
//! target range printed on the lab report and the foods the user is willing to
//! eat. Validation never stops at the first problem: every invalid field is
//! reported so it can be shown next to the input it belongs to.
//!
//! # Examples
//!
//! ```
//! use relevel::form::LabReportForm;
//! use relevel::nutrient::Nutrient;
//!
//! let form = LabReportForm::sample();
//! assert!(form.validate().is_empty());
//!
//! let reading = form.to_reading()?;
//! assert_eq!(reading.get(Nutrient::VitaminB12), Some(180.0));
//! # Ok::<(), relevel::error::RelevelError>(())
//! ```

use crate::error::RelevelError;
use crate::nutrient::Nutrient;
use crate::reading::NutrientReading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Foods and supplements the form offers for the desired-intake field
pub const INTAKE_OPTIONS: &[&str] = &[
    "Milk",
    "Eggs",
    "Fish",
    "Meat",
    "Poultry",
    "Legumes",
    "Nuts",
    "Seeds",
    "Whole Grains",
    "Leafy Greens",
    "Fruits",
    "Vegetables",
    "Dairy Products",
    "Fortified Foods",
    "Supplements",
    "Sunlight Exposure",
    "Shellfish",
    "Liver",
    "Mushrooms",
    "Sweet Potatoes",
    "Carrots",
    "Spinach",
    "Kale",
    "Broccoli",
    "Oranges",
    "Strawberries",
    "Almonds",
    "Walnuts",
    "Chia Seeds",
    "Flax Seeds",
];

/// One invalid field and the message to show for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name, as the form knows it
    pub field: &'static str,
    /// User-facing message
    pub message: &'static str,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Raw lab report input
///
/// Numeric fields are kept as typed text so that validation can tell a missing
/// value from an unparsable one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReportForm {
    /// Nutrient the measurement belongs to
    pub selected_nutrient: Option<Nutrient>,
    /// Measured value as typed
    pub current_value: String,
    /// Unit of the measured value
    pub current_unit: Option<String>,
    /// Lower end of the lab's reference range
    pub target_min: String,
    /// Upper end of the lab's reference range
    pub target_max: String,
    /// Unit of the reference range
    pub target_unit: Option<String>,
    /// Foods or supplements the user wants suggestions from
    pub desired_intake: Vec<String>,
}

/// Parsing is strict: trailing text such as "12abc" makes the whole value invalid.
fn positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn parsed(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl LabReportForm {
    /// Values filled in after a lab report upload
    pub fn sample() -> Self {
        Self {
            selected_nutrient: Some(Nutrient::VitaminB12),
            current_value: "180".to_string(),
            current_unit: Some("pg/mL".to_string()),
            target_min: "200".to_string(),
            target_max: "900".to_string(),
            target_unit: Some("pg/mL".to_string()),
            desired_intake: ["Salmon", "Tuna", "Eggs", "Dairy products"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Pick a nutrient; unit choices depend on it, so both units are cleared
    pub fn select_nutrient(&mut self, nutrient: Nutrient) {
        self.selected_nutrient = Some(nutrient);
        self.current_unit = None;
        self.target_unit = None;
    }

    /// Add `option` to the desired intake, or remove it if already present
    pub fn toggle_intake(&mut self, option: &str) {
        if let Some(pos) = self.desired_intake.iter().position(|o| o == option) {
            self.desired_intake.remove(pos);
        } else {
            self.desired_intake.push(option.to_string());
        }
    }

    /// Units to offer for either unit picker
    pub fn unit_choices(&self) -> Vec<&'static str> {
        crate::nutrient::unit_choices(self.selected_nutrient)
    }

    /// Every invalid field, in form order; empty when the form can be submitted
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        let mut issue = |field, message| issues.push(FieldIssue { field, message });

        if self.selected_nutrient.is_none() {
            issue("selectedNutrient", "Please select a nutrient to track");
        }
        if positive(&self.current_value).is_none() {
            issue("currentValue", "Please enter a valid current value");
        }
        if blank(&self.current_unit) {
            issue("currentUnit", "Please select a unit for current value");
        }
        if positive(&self.target_min).is_none() {
            issue("targetMin", "Please enter a valid minimum target");
        }
        if positive(&self.target_max).is_none() {
            issue("targetMax", "Please enter a valid maximum target");
        }
        if let (Some(min), Some(max)) = (parsed(&self.target_min), parsed(&self.target_max)) {
            if min >= max {
                issue(
                    "targetRange",
                    "Minimum target must be less than maximum target",
                );
            }
        }
        if blank(&self.target_unit) {
            issue("targetUnit", "Please select a unit for target range");
        }
        if self.desired_intake.is_empty() {
            issue(
                "desiredIntake",
                "Please select at least one food/supplement option",
            );
        }

        issues
    }

    /// Convert a valid form into a single-nutrient reading
    pub fn to_reading(&self) -> Result<NutrientReading, RelevelError> {
        let issues = self.validate();
        if !issues.is_empty() {
            log::debug!("lab report rejected with {} issue(s)", issues.len());
            return Err(RelevelError::FormInvalid {
                issues: issues.iter().map(ToString::to_string).collect(),
            });
        }

        match (self.selected_nutrient, positive(&self.current_value)) {
            (Some(nutrient), Some(value)) => NutrientReading::single(nutrient, value),
            // validate() already reported both of these
            _ => Err(RelevelError::FormInvalid { issues: Vec::new() }),
        }
    }
}
