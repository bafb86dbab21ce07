//! Unit string parsing
//!
//! Turns user-entered unit strings ("Tablespoons", "fl oz", "lbs") into a
//! catalog [`Unit`]. This is the only place an unknown unit can occur.

use std::str::FromStr;

use thiserror::Error;

use super::units::Unit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseUnitError {
    #[error("unknown unit '{0}'")]
    Unknown(String),
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Recipe shorthand where case matters
        match trimmed {
            "t" => return Ok(Unit::Tsp),
            "T" => return Ok(Unit::Tbsp),
            _ => {}
        }

        let lower = trimmed.to_lowercase();
        let unit = match lower.as_str() {
            "g" | "gram" | "grams" | "gramme" | "grammes" => Unit::G,
            "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Unit::Kg,
            "oz" | "ounce" | "ounces" => Unit::Oz,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Lb,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Unit::Ml,
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::L,
            "fl-oz" | "fl oz" | "floz" | "fl. oz" | "fl. oz." | "fluid ounce" | "fluid ounces" => {
                Unit::FlOz
            }
            "cup" | "cups" | "c" => Unit::Cup,
            "pint" | "pints" | "pt" => Unit::Pint,
            "quart" | "quarts" | "qt" => Unit::Quart,
            "gallon" | "gallons" | "gal" => Unit::Gallon,
            "tsp" | "tsps" | "teaspoon" | "teaspoons" => Unit::Tsp,
            "tbsp" | "tbsps" | "tbs" | "tablespoon" | "tablespoons" => Unit::Tbsp,
            "piece" | "pieces" | "pc" | "pcs" | "each" | "count" | "item" | "items" => Unit::Piece,
            "" | "free-text" | "free text" | "freetext" => Unit::FreeText,
            _ => return Err(ParseUnitError::Unknown(trimmed.to_string())),
        };
        Ok(unit)
    }
}
