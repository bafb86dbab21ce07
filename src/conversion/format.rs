//! Display formatting for units and quantities
//!
//! Cosmetic only: nothing here should feed back into a conversion.

use super::units::Unit;

/// Decimal places used when no precision is requested
pub const DEFAULT_PRECISION: u32 = 2;

/// Plural English label for a unit
pub fn display_name(unit: Unit) -> &'static str {
    match unit {
        Unit::G => "grams",
        Unit::Kg => "kilograms",
        Unit::Oz => "ounces",
        Unit::Lb => "pounds",
        Unit::Ml => "milliliters",
        Unit::L => "liters",
        Unit::FlOz => "fluid ounces",
        Unit::Cup => "cups",
        Unit::Pint => "pints",
        Unit::Quart => "quarts",
        Unit::Gallon => "gallons",
        Unit::Tsp => "teaspoons",
        Unit::Tbsp => "tablespoons",
        Unit::Piece => "pieces",
        Unit::FreeText => "free text",
    }
}

/// Display label for a raw unit string, echoing it back if it is not a known unit
pub fn format_unit_str(unit: &str) -> String {
    match unit.parse::<Unit>() {
        Ok(parsed) => display_name(parsed).to_string(),
        Err(_) => unit.to_string(),
    }
}

/// Round to `precision` decimal places, half away from zero.
///
/// Non-finite values, and values too large to scale, come back unchanged.
/// Results that round to zero are always positive zero.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let exponent = i32::try_from(precision).unwrap_or(i32::MAX);
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scale.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale + 0.0
}

/// "2.5 cups" style label. Free-text quantities render as the label alone.
pub fn format_quantity(quantity: f64, unit: Unit, precision: u32) -> String {
    if unit.is_free_text() {
        return display_name(unit).to_string();
    }
    format!("{} {}", round_to_precision(quantity, precision), display_name(unit))
}
