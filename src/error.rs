//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use relevel::error::RelevelError;
//! use relevel::nutrient::Nutrient;
//! use relevel::reading::NutrientReading;
//!
//! let mut reading = NutrientReading::new();
//! match reading.insert(Nutrient::Iron, -4.0) {
//!     Ok(()) => unreachable!(),
//!     Err(RelevelError::InvalidMeasurement { value, .. }) => assert_eq!(value, -4.0),
//!     Err(other) => panic!("unexpected error: {}", other),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by relevel with contextual suggestions
#[derive(Error, Debug)]
pub enum RelevelError {
    /// Measurement is negative, NaN or infinite
    #[error("Invalid measurement for {nutrient}: {value}")]
    InvalidMeasurement {
        /// Nutrient key the value was given for
        nutrient: String,
        /// Offending value
        value: f64,
    },

    /// Nutrient key is not part of the catalogue
    #[error("Unknown nutrient: '{name}'")]
    UnknownNutrient {
        /// Key as given
        name: String,
        /// Valid nutrient keys
        available: Vec<String>,
    },

    /// `key=value` argument could not be parsed
    #[error("Invalid reading '{input}', expected <nutrient>=<value>")]
    InvalidAssignment {
        /// Raw argument
        input: String,
    },

    /// Threshold rule is unusable
    #[error("Invalid rule for {nutrient}: {reason}")]
    InvalidRule {
        /// Nutrient key of the rule
        nutrient: String,
        /// Why the rule was rejected
        reason: String,
    },

    /// Rule table names a nutrient more than once
    #[error("Duplicate rule for {nutrient}")]
    DuplicateRule {
        /// Nutrient key that appears twice
        nutrient: String,
    },

    /// Lab report form failed validation
    #[error("Lab report has {} invalid field(s)", .issues.len())]
    FormInvalid {
        /// `field: message` lines
        issues: Vec<String>,
    },

    /// Config file already exists and would be overwritten
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Path to config file
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl RelevelError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use relevel::error::RelevelError;
    ///
    /// let error = RelevelError::UnknownNutrient {
    ///     name: "vitaminQ".to_string(),
    ///     available: vec!["iron".to_string(), "zinc".to_string()],
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("iron, zinc"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidMeasurement { .. } => {
                Some("Measurements must be finite numbers of zero or more".to_string())
            }
            Self::UnknownNutrient { available, .. } => Some(format!(
                "Known nutrients: {}\nRun 'relevel nutrients' to see labels and units",
                available.join(", ")
            )),
            Self::InvalidAssignment { .. } => {
                Some("Use the form --set vitaminB12=150".to_string())
            }
            Self::InvalidRule { .. } => Some(
                "Thresholds must be finite and greater than zero. Check [[rules]] in .relevel.toml"
                    .to_string(),
            ),
            Self::DuplicateRule { nutrient } => Some(format!(
                "Remove one of the {} rules, or set replace-default-rules = true",
                nutrient
            )),
            Self::FormInvalid { issues } => Some(issues.join("\n")),
            Self::ConfigExists { path } => Some(format!(
                "Delete {} first or edit it manually",
                path.display()
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use relevel::error::RelevelError;
    ///
    /// let error = RelevelError::InvalidAssignment { input: "iron".to_string() };
    /// assert_eq!(error.exit_code(), 64); // EX_USAGE
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidMeasurement { .. } => 65,  // EX_DATAERR
            Self::UnknownNutrient { .. } => 64,     // EX_USAGE
            Self::InvalidAssignment { .. } => 64,   // EX_USAGE
            Self::InvalidRule { .. } => 78,         // EX_CONFIG
            Self::DuplicateRule { .. } => 78,       // EX_CONFIG
            Self::FormInvalid { .. } => 65,         // EX_DATAERR
            Self::ConfigExists { .. } => 73,        // EX_CANTCREAT
            Self::Io { .. } => 74,                  // EX_IOERR
        }
    }

    /// Build an [`RelevelError::UnknownNutrient`] listing the catalogue
    pub fn unknown_nutrient(name: impl Into<String>) -> Self {
        Self::UnknownNutrient {
            name: name.into(),
            available: crate::nutrient::Nutrient::keys()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(rl_error) = Self::find(error) {
            if let Some(suggestion) = rl_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, RelevelError::exit_code)
    }

    // Context layers wrap the typed error, so search the whole chain.
    fn find(error: &anyhow::Error) -> Option<&RelevelError> {
        error.chain().find_map(|e| e.downcast_ref::<RelevelError>())
    }
}
