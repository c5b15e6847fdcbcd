//! Nutrient catalogue for lab-report input
//!
//! Every measurement in relevel is keyed by one of a fixed set of nutrients.
//! Each nutrient knows its wire key (as used in `.relevel.toml` and on the
//! command line), a display label, and the lab units it is usually reported in.
//!
//! # Examples
//!
//! ```
//! use relevel::nutrient::Nutrient;
//!
//! let iron: Nutrient = "iron".parse().unwrap();
//! assert_eq!(iron.label(), "Iron");
//! assert_eq!(iron.units()[0], "µg/dL");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every unit the lab form accepts, in display order
pub const ALL_UNITS: &[&str] = &[
    "pg/mL", "ng/mL", "µg/mL", "mg/mL", "g/mL", "pg/dL", "ng/dL", "µg/dL", "mg/dL", "g/dL",
    "pg/L", "ng/L", "µg/L", "mg/L", "g/L", "pmol/L", "nmol/L", "µmol/L", "mmol/L", "mol/L",
    "mEq/L", "IU/L", "U/L", "kU/L",
];

/// Nutrient identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    /// Vitamin B12 (cobalamin)
    #[serde(rename = "vitaminB12")]
    VitaminB12,
    /// Vitamin D
    VitaminD,
    /// Iron
    Iron,
    /// Calcium
    Calcium,
    /// Magnesium
    Magnesium,
    /// Folate
    Folate,
    /// Zinc
    Zinc,
    /// Selenium
    Selenium,
    /// Vitamin C
    VitaminC,
    /// Vitamin E
    VitaminE,
    /// Vitamin K
    VitaminK,
    /// Vitamin A
    VitaminA,
}

impl Nutrient {
    /// All nutrients, in the order the lab form offers them
    pub const ALL: [Nutrient; 12] = [
        Nutrient::VitaminB12,
        Nutrient::VitaminD,
        Nutrient::Iron,
        Nutrient::Calcium,
        Nutrient::Magnesium,
        Nutrient::Folate,
        Nutrient::Zinc,
        Nutrient::Selenium,
        Nutrient::VitaminC,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::VitaminA,
    ];

    /// Wire key used in config files and `--set key=value`
    pub fn key(&self) -> &'static str {
        match self {
            Self::VitaminB12 => "vitaminB12",
            Self::VitaminD => "vitaminD",
            Self::Iron => "iron",
            Self::Calcium => "calcium",
            Self::Magnesium => "magnesium",
            Self::Folate => "folate",
            Self::Zinc => "zinc",
            Self::Selenium => "selenium",
            Self::VitaminC => "vitaminC",
            Self::VitaminE => "vitaminE",
            Self::VitaminK => "vitaminK",
            Self::VitaminA => "vitaminA",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::VitaminB12 => "Vitamin B12",
            Self::VitaminD => "Vitamin D",
            Self::Iron => "Iron",
            Self::Calcium => "Calcium",
            Self::Magnesium => "Magnesium",
            Self::Folate => "Folate",
            Self::Zinc => "Zinc",
            Self::Selenium => "Selenium",
            Self::VitaminC => "Vitamin C",
            Self::VitaminE => "Vitamin E",
            Self::VitaminK => "Vitamin K",
            Self::VitaminA => "Vitamin A",
        }
    }

    /// Units labs commonly report this nutrient in, most common first
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Self::VitaminB12 => &["pg/mL", "ng/L", "pmol/L", "ng/dL", "µg/L"],
            Self::VitaminD => &["ng/mL", "nmol/L", "IU/L", "µg/L", "pg/mL"],
            Self::Iron | Self::Zinc => &["µg/dL", "mg/L", "µmol/L", "mg/dL", "g/L", "ng/mL"],
            Self::Calcium | Self::Magnesium => {
                &["mg/dL", "mmol/L", "mEq/L", "g/L", "µg/mL", "ng/mL"]
            }
            Self::Folate => &["ng/mL", "nmol/L", "µg/L", "mg/L", "pg/mL"],
            Self::Selenium => &["µg/L", "ng/mL", "µmol/L", "mg/L", "g/L"],
            Self::VitaminC | Self::VitaminE => &["mg/dL", "µmol/L", "g/L", "µg/mL", "ng/mL"],
            Self::VitaminK => &["ng/mL", "µmol/L", "µg/L", "mg/L", "pg/mL"],
            Self::VitaminA => &["µg/dL", "µmol/L", "IU/L", "mg/L", "ng/mL"],
        }
    }

    /// Unit picker contents: this nutrient's units first, then the rest of [`ALL_UNITS`]
    pub fn unit_choices(&self) -> Vec<&'static str> {
        unit_choices(Some(*self))
    }

    /// Keys of every nutrient, for error messages
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(Nutrient::key).collect()
    }
}

/// Unit picker contents, with no nutrient selected falling back to the full catalogue
pub fn unit_choices(selected: Option<Nutrient>) -> Vec<&'static str> {
    match selected {
        Some(nutrient) => {
            let specific = nutrient.units();
            let mut units = specific.to_vec();
            units.extend(ALL_UNITS.iter().filter(|u| !specific.contains(u)));
            units
        }
        None => ALL_UNITS.to_vec(),
    }
}

impl FromStr for Nutrient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.key().eq_ignore_ascii_case(wanted) || n.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown nutrient: {}", s))
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_key_and_label_case_insensitively() {
        assert_eq!("vitaminB12".parse::<Nutrient>(), Ok(Nutrient::VitaminB12));
        assert_eq!("VITAMINB12".parse::<Nutrient>(), Ok(Nutrient::VitaminB12));
        assert_eq!("Vitamin D".parse::<Nutrient>(), Ok(Nutrient::VitaminD));
        assert!("unobtainium".parse::<Nutrient>().is_err());
    }

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for nutrient in Nutrient::ALL {
            assert_eq!(nutrient.key().parse::<Nutrient>(), Ok(nutrient));
        }
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&Nutrient::VitaminB12).unwrap();
        assert_eq!(json, "\"vitaminB12\"");
        let parsed: Nutrient = serde_json::from_str("\"vitaminD\"").unwrap();
        assert_eq!(parsed, Nutrient::VitaminD);
    }

    #[test]
    fn test_unit_choices_put_specific_units_first_without_duplicates() {
        let units = Nutrient::VitaminB12.unit_choices();
        assert_eq!(&units[..5], Nutrient::VitaminB12.units());
        assert_eq!(units.len(), ALL_UNITS.len());

        let mut sorted = units.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), units.len());
    }

    #[test]
    fn test_unit_choices_without_selection_is_full_catalogue() {
        assert_eq!(unit_choices(None), ALL_UNITS.to_vec());
    }
}
