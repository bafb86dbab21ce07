//! Unit types and conversion constants
//!
//! The unit catalog: every recognized unit, the category it belongs to, and
//! its conversion factor relative to the category's base unit.

use serde::{Deserialize, Serialize};

/// A recognized measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    G,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "oz")]
    Oz,
    #[serde(rename = "lb")]
    Lb,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "l")]
    L,
    #[serde(rename = "fl-oz")]
    FlOz,
    #[serde(rename = "cup")]
    Cup,
    #[serde(rename = "pint")]
    Pint,
    #[serde(rename = "quart")]
    Quart,
    #[serde(rename = "gallon")]
    Gallon,
    #[serde(rename = "tsp")]
    Tsp,
    #[serde(rename = "tbsp")]
    Tbsp,
    #[serde(rename = "piece")]
    Piece,
    /// Non-numeric quantity description ("a pinch", "to taste")
    #[serde(rename = "free-text")]
    FreeText,
}

impl Unit {
    /// Every unit, in catalog order
    pub const ALL: [Unit; 15] = [
        Unit::G,
        Unit::Kg,
        Unit::Oz,
        Unit::Lb,
        Unit::Ml,
        Unit::L,
        Unit::FlOz,
        Unit::Cup,
        Unit::Pint,
        Unit::Quart,
        Unit::Gallon,
        Unit::Tsp,
        Unit::Tbsp,
        Unit::Piece,
        Unit::FreeText,
    ];

    /// Canonical identifier, as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Oz => "oz",
            Unit::Lb => "lb",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::FlOz => "fl-oz",
            Unit::Cup => "cup",
            Unit::Pint => "pint",
            Unit::Quart => "quart",
            Unit::Gallon => "gallon",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Piece => "piece",
            Unit::FreeText => "free-text",
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self, Unit::FreeText)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a measurement unit. Conversion is only defined within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitCategory {
    /// Mass units, base grams
    Weight,
    /// Liquid volume units, base milliliters
    Volume,
    /// Spoon measures, base teaspoons
    Spoon,
    /// Discrete items, base piece
    Count,
    /// The free-text sentinel, never interchangeable with anything else
    FreeText,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 5] = [
        UnitCategory::Weight,
        UnitCategory::Volume,
        UnitCategory::Spoon,
        UnitCategory::Count,
        UnitCategory::FreeText,
    ];

    /// The units belonging to this category
    pub fn members(&self) -> &'static [Unit] {
        match self {
            UnitCategory::Weight => &[Unit::G, Unit::Kg, Unit::Oz, Unit::Lb],
            UnitCategory::Volume => &[
                Unit::Ml,
                Unit::L,
                Unit::FlOz,
                Unit::Cup,
                Unit::Pint,
                Unit::Quart,
                Unit::Gallon,
            ],
            UnitCategory::Spoon => &[Unit::Tsp, Unit::Tbsp],
            UnitCategory::Count => &[Unit::Piece],
            UnitCategory::FreeText => &[Unit::FreeText],
        }
    }

    /// The implicit base unit factors are expressed against
    pub fn base_unit(&self) -> Option<Unit> {
        match self {
            UnitCategory::Weight => Some(Unit::G),
            UnitCategory::Volume => Some(Unit::Ml),
            UnitCategory::Spoon => Some(Unit::Tsp),
            UnitCategory::Count => Some(Unit::Piece),
            UnitCategory::FreeText => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Spoon => "spoon",
            UnitCategory::Count => "count",
            UnitCategory::FreeText => "freeText",
        }
    }
}

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per fluid ounce (US)
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Spoon Conversion Constants (to teaspoons)
// ============================================================================

/// Teaspoons per tablespoon
pub const TSP_PER_TBSP: f64 = 3.0;

// ============================================================================
// Catalog Lookup
// ============================================================================

/// Determine the category of a unit.
///
/// Returns the category whose member list contains `unit`. The unit enum is
/// closed, so every unit is classified; `None` only if a member table were
/// ever left out of sync with the enum.
pub fn category_of(unit: Unit) -> Option<UnitCategory> {
    UnitCategory::ALL
        .into_iter()
        .find(|category| category.members().contains(&unit))
}

/// How many base units of its category one `unit` equals.
///
/// The free-text sentinel has no factor.
pub fn conversion_factor(unit: Unit) -> Option<f64> {
    match unit {
        Unit::G => Some(1.0),
        Unit::Kg => Some(G_PER_KG),
        Unit::Oz => Some(G_PER_OZ),
        Unit::Lb => Some(G_PER_LB),
        Unit::Ml => Some(1.0),
        Unit::L => Some(ML_PER_LITER),
        Unit::FlOz => Some(ML_PER_FL_OZ),
        Unit::Cup => Some(ML_PER_CUP),
        Unit::Pint => Some(ML_PER_PINT),
        Unit::Quart => Some(ML_PER_QUART),
        Unit::Gallon => Some(ML_PER_GALLON),
        Unit::Tsp => Some(1.0),
        Unit::Tbsp => Some(TSP_PER_TBSP),
        Unit::Piece => Some(1.0),
        Unit::FreeText => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_weight_units() {
        for unit in [Unit::G, Unit::Kg, Unit::Oz, Unit::Lb] {
            assert_eq!(category_of(unit), Some(UnitCategory::Weight));
        }
    }

    #[test]
    fn test_categorize_volume_units() {
        assert_eq!(category_of(Unit::Ml), Some(UnitCategory::Volume));
        assert_eq!(category_of(Unit::FlOz), Some(UnitCategory::Volume));
        assert_eq!(category_of(Unit::Cup), Some(UnitCategory::Volume));
        assert_eq!(category_of(Unit::Gallon), Some(UnitCategory::Volume));
    }

    #[test]
    fn test_spoons_are_their_own_category() {
        assert_eq!(category_of(Unit::Tsp), Some(UnitCategory::Spoon));
        assert_eq!(category_of(Unit::Tbsp), Some(UnitCategory::Spoon));
    }

    #[test]
    fn test_count_and_free_text() {
        assert_eq!(category_of(Unit::Piece), Some(UnitCategory::Count));
        assert_eq!(category_of(Unit::FreeText), Some(UnitCategory::FreeText));
    }

    #[test]
    fn test_every_unit_in_exactly_one_category() {
        for unit in Unit::ALL {
            let count = UnitCategory::ALL
                .iter()
                .filter(|c| c.members().contains(&unit))
                .count();
            assert_eq!(count, 1, "{} classified {} times", unit, count);
        }
    }

    #[test]
    fn test_factors() {
        assert_eq!(conversion_factor(Unit::G), Some(1.0));
        assert_eq!(conversion_factor(Unit::Lb), Some(453.592));
        assert_eq!(conversion_factor(Unit::Oz), Some(28.3495));
        assert_eq!(conversion_factor(Unit::Cup), Some(236.588));
        assert_eq!(conversion_factor(Unit::FlOz), Some(29.5735));
        assert_eq!(conversion_factor(Unit::Tbsp), Some(3.0));
        assert_eq!(conversion_factor(Unit::FreeText), None);
    }

    #[test]
    fn test_every_numeric_unit_has_positive_factor() {
        for unit in Unit::ALL.into_iter().filter(|u| !u.is_free_text()) {
            let factor = conversion_factor(unit).unwrap();
            assert!(factor > 0.0, "{} has factor {}", unit, factor);
        }
    }

    #[test]
    fn test_base_units_have_factor_one() {
        for category in UnitCategory::ALL {
            if let Some(base) = category.base_unit() {
                assert_eq!(conversion_factor(base), Some(1.0));
                assert_eq!(category_of(base), Some(category));
            }
        }
    }

    #[test]
    fn test_serde_identifiers() {
        assert_eq!(serde_json::to_string(&Unit::FlOz).unwrap(), "\"fl-oz\"");
        assert_eq!(serde_json::to_string(&Unit::FreeText).unwrap(), "\"free-text\"");
        assert_eq!(
            serde_json::to_string(&UnitCategory::FreeText).unwrap(),
            "\"freeText\""
        );
        let unit: Unit = serde_json::from_str("\"tbsp\"").unwrap();
        assert_eq!(unit, Unit::Tbsp);
        for unit in Unit::ALL {
            assert_eq!(serde_json::to_string(&unit).unwrap(), format!("\"{}\"", unit));
        }
    }
}
