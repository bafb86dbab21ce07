//! Unit conversion module
//!
//! The unit catalog, conversion engine, and display formatting.

pub mod converter;
pub mod format;
pub mod parse;
pub mod units;

pub use converter::{
    are_compatible, convert_price_per_unit, convert_quantity, ConversionError, ConversionResult,
};
pub use format::{
    display_name, format_quantity, format_unit_str, round_to_precision, DEFAULT_PRECISION,
};
pub use parse::ParseUnitError;
pub use units::{category_of, conversion_factor, Unit, UnitCategory};

/// Alias matching the tool name
pub fn are_units_compatible(from: Unit, to: Unit) -> bool {
    are_compatible(from, to)
}

/// Alias matching the tool name
pub fn convert_unit(quantity: f64, from: Unit, to: Unit) -> ConversionResult<f64> {
    convert_quantity(quantity, from, to)
}

/// Alias matching the tool name
pub fn format_unit(unit: Unit) -> &'static str {
    display_name(unit)
}
