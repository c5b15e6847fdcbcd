#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! relevel library
//!
//! Turns lab measurements into food recommendations. Each nutrient with a
//! threshold rule is checked against its measured value; anything strictly
//! below its threshold is reported together with suggested foods and how far
//! along the way to the threshold the measurement is.
//!
//! # Basic Example
//!
//! ```
//! use relevel::nutrient::Nutrient;
//! use relevel::reading::NutrientReading;
//! use relevel::recommend::derive;
//!
//! let reading = NutrientReading::from_pairs([
//!     (Nutrient::VitaminB12, 250.0),
//!     (Nutrient::VitaminD, 12.0),
//!     (Nutrient::Iron, 75.0),
//! ])?;
//!
//! let recs = derive(&reading);
//! assert_eq!(recs.len(), 1);
//! assert_eq!(recs[0].nutrient, "Vitamin D");
//! assert_eq!(recs[0].progress_percent, 40);
//! # Ok::<(), relevel::error::RelevelError>(())
//! ```
//!
//! # Custom Rules
//!
//! ```
//! use relevel::nutrient::Nutrient;
//! use relevel::reading::NutrientReading;
//! use relevel::recommend::{derive_with, MissingReadingPolicy};
//! use relevel::rules::{RuleTable, ThresholdRule};
//!
//! let table = RuleTable::with_extra(vec![
//!     ThresholdRule::new(Nutrient::Magnesium, 1.7, ["Pumpkin seeds", "Spinach"])?,
//! ])?;
//!
//! let reading = NutrientReading::single(Nutrient::Magnesium, 1.2)?;
//! let recs = derive_with(&reading, &table, MissingReadingPolicy::Skip);
//! assert_eq!(recs.len(), 1);
//! assert_eq!(recs[0].id, 4);
//! assert_eq!(recs[0].progress_percent, 71);
//! # Ok::<(), relevel::error::RelevelError>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Dashboard view: levels, meal plan and weekly progress
pub mod dashboard;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Lab report form model and validation
pub mod form;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Nutrient catalogue
pub mod nutrient;
/// JSON output documents
pub mod output;
/// Validated lab measurements
pub mod reading;
/// Recommendation derivation
pub mod recommend;
/// Threshold rules
pub mod rules;
/// Session state
pub mod session;
/// Display summaries and fallback data
pub mod summary;
