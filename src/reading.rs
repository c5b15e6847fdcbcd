//! Lab measurements keyed by nutrient
//!
//! A [`NutrientReading`] is the input of recommendation derivation. Values are
//! validated on the way in, so anything that holds a reading can rely on every
//! measurement being a finite number of zero or more.

use crate::error::RelevelError;
use crate::nutrient::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Measured value per nutrient
///
/// # Examples
///
/// ```
/// use relevel::nutrient::Nutrient;
/// use relevel::reading::NutrientReading;
///
/// let reading = NutrientReading::single(Nutrient::VitaminD, 18.5)?;
/// assert_eq!(reading.get(Nutrient::VitaminD), Some(18.5));
/// assert_eq!(reading.get(Nutrient::Iron), None);
/// # Ok::<(), relevel::error::RelevelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Nutrient, f64>", into = "BTreeMap<Nutrient, f64>")]
pub struct NutrientReading {
    values: BTreeMap<Nutrient, f64>,
}

impl NutrientReading {
    /// Create an empty reading
    pub fn new() -> Self {
        Self::default()
    }

    /// Reading with exactly one measurement, as produced by the lab form
    pub fn single(nutrient: Nutrient, value: f64) -> Result<Self, RelevelError> {
        let mut reading = Self::new();
        reading.insert(nutrient, value)?;
        Ok(reading)
    }

    /// Build from `(nutrient, value)` pairs; later pairs win on duplicate keys
    pub fn from_pairs<I>(pairs: I) -> Result<Self, RelevelError>
    where
        I: IntoIterator<Item = (Nutrient, f64)>,
    {
        let mut reading = Self::new();
        for (nutrient, value) in pairs {
            reading.insert(nutrient, value)?;
        }
        Ok(reading)
    }

    /// Set a measurement, rejecting negative and non-finite values
    pub fn insert(&mut self, nutrient: Nutrient, value: f64) -> Result<(), RelevelError> {
        if !value.is_finite() || value < 0.0 {
            return Err(RelevelError::InvalidMeasurement {
                nutrient: nutrient.key().to_string(),
                value,
            });
        }
        self.values.insert(nutrient, value);
        Ok(())
    }

    /// Measurement for a nutrient, if one was taken
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values.get(&nutrient).copied()
    }

    /// Iterate measurements in nutrient order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.values.iter().map(|(n, v)| (*n, *v))
    }

    /// Number of measured nutrients
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing was measured
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse a `nutrient=value` command-line assignment
///
/// # Examples
///
/// ```
/// use relevel::nutrient::Nutrient;
/// use relevel::reading::parse_assignment;
///
/// let (nutrient, value) = parse_assignment("vitaminB12=150").unwrap();
/// assert_eq!(nutrient, Nutrient::VitaminB12);
/// assert_eq!(value, 150.0);
/// ```
pub fn parse_assignment(input: &str) -> Result<(Nutrient, f64), RelevelError> {
    let (key, raw_value) = input
        .split_once('=')
        .ok_or_else(|| RelevelError::InvalidAssignment {
            input: input.to_string(),
        })?;

    let nutrient: Nutrient = key
        .parse()
        .map_err(|_| RelevelError::unknown_nutrient(key.trim()))?;

    let value: f64 = raw_value
        .trim()
        .parse()
        .map_err(|_| RelevelError::InvalidAssignment {
            input: input.to_string(),
        })?;

    Ok((nutrient, value))
}

impl TryFrom<BTreeMap<Nutrient, f64>> for NutrientReading {
    type Error = RelevelError;

    fn try_from(values: BTreeMap<Nutrient, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(values)
    }
}

impl From<NutrientReading> for BTreeMap<Nutrient, f64> {
    fn from(reading: NutrientReading) -> Self {
        reading.values
    }
}
