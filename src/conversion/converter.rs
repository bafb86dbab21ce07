//! Unit conversion functions
//!
//! Compatibility checks plus quantity and price conversion over the unit catalog.

use thiserror::Error;

use super::units::{category_of, conversion_factor, Unit};

/// Conversion failures. All are deterministic in the unit pair; retrying never helps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} to {to}: units are not compatible")]
    IncompatibleUnits { from: Unit, to: Unit },

    /// A classified unit lacks a factor entry. Indicates a catalog bug.
    #[error("no conversion factor for unit {unit}")]
    MissingConversionFactor { unit: Unit },
}

/// Result type for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Check whether a quantity in `from` can be expressed in `to`.
///
/// A unit is always compatible with itself, free-text included. Free-text is
/// never compatible with anything else.
pub fn are_compatible(from: Unit, to: Unit) -> bool {
    if from == to {
        return true;
    }
    if from.is_free_text() || to.is_free_text() {
        return false;
    }
    match (category_of(from), category_of(to)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Convert `quantity` from one unit to another.
///
/// Same-unit conversions return the input untouched.
pub fn convert_quantity(quantity: f64, from: Unit, to: Unit) -> ConversionResult<f64> {
    if from == to {
        return Ok(quantity);
    }

    if !are_compatible(from, to) {
        return Err(ConversionError::IncompatibleUnits { from, to });
    }

    let from_factor =
        conversion_factor(from).ok_or(ConversionError::MissingConversionFactor { unit: from })?;
    let to_factor =
        conversion_factor(to).ok_or(ConversionError::MissingConversionFactor { unit: to })?;

    let converted = quantity * (from_factor / to_factor);
    tracing::debug!("Converted {} {} -> {} {}", quantity, from, converted, to);
    Ok(converted)
}

/// Convert a price per `from` unit into a price per `to` unit.
///
/// If 1 kg costs X, 1 g costs X / 1000: divide by how many `to` units one
/// `from` unit holds.
pub fn convert_price_per_unit(price_per_unit: f64, from: Unit, to: Unit) -> ConversionResult<f64> {
    if from == to {
        return Ok(price_per_unit);
    }
    Ok(price_per_unit / convert_quantity(1.0, from, to)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::units::UnitCategory;

    fn approx(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_grams_to_kilograms() {
        assert_eq!(convert_quantity(1000.0, Unit::G, Unit::Kg).unwrap(), 1.0);
    }

    #[test]
    fn test_pounds_to_grams() {
        let grams = convert_quantity(2.0, Unit::Lb, Unit::G).unwrap();
        assert!((grams - 907.184).abs() < 1e-9);
    }

    #[test]
    fn test_tablespoon_to_teaspoons() {
        assert_eq!(convert_quantity(1.0, Unit::Tbsp, Unit::Tsp).unwrap(), 3.0);
    }

    #[test]
    fn test_cups_to_grams_incompatible() {
        let err = convert_quantity(5.0, Unit::Cup, Unit::G).unwrap_err();
        assert_eq!(
            err,
            ConversionError::IncompatibleUnits { from: Unit::Cup, to: Unit::G }
        );
        assert_eq!(err.to_string(), "cannot convert cup to g: units are not compatible");
    }

    #[test]
    fn test_spoons_do_not_mix_with_volume() {
        assert!(!are_compatible(Unit::Tbsp, Unit::Ml));
        assert!(convert_quantity(1.0, Unit::Tsp, Unit::Cup).is_err());
    }

    #[test]
    fn test_price_kg_to_g() {
        let price = convert_price_per_unit(100.0, Unit::Kg, Unit::G).unwrap();
        assert!((price - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_price_propagates_incompatibility() {
        let err = convert_price_per_unit(3.5, Unit::Piece, Unit::G).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleUnits { .. }));
    }

    #[test]
    fn test_identity_is_exact() {
        let values = [0.0, -0.0, 1.0, -7.25, 0.1 + 0.2, 1e-300, 1e300, 123456.789];
        for unit in Unit::ALL {
            for x in values {
                let y = convert_quantity(x, unit, unit).unwrap();
                assert_eq!(y.to_bits(), x.to_bits(), "{} {}", x, unit);
            }
        }
    }

    #[test]
    fn test_round_trip_all_compatible_pairs() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                if a.is_free_text() || b.is_free_text() || !are_compatible(a, b) {
                    continue;
                }
                for x in [0.001, 1.0, 2.5, 750.0, 1e6] {
                    let there = convert_quantity(x, a, b).unwrap();
                    let back = convert_quantity(there, b, a).unwrap();
                    assert!(approx(back, x, 1e-9), "{} {} -> {} -> {}", x, a, b, back);
                }
            }
        }
    }

    #[test]
    fn test_category_closure() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                let same_category = category_of(a) == category_of(b);
                let expected = a == b || (!a.is_free_text() && !b.is_free_text() && same_category);
                assert_eq!(are_compatible(a, b), expected, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_free_text_exclusion() {
        assert!(are_compatible(Unit::FreeText, Unit::FreeText));
        assert_eq!(convert_quantity(4.0, Unit::FreeText, Unit::FreeText).unwrap(), 4.0);
        for other in Unit::ALL.into_iter().filter(|u| *u != Unit::FreeText) {
            assert!(!are_compatible(Unit::FreeText, other));
            assert!(!are_compatible(other, Unit::FreeText));
            assert!(convert_quantity(1.0, Unit::FreeText, other).is_err());
            assert!(convert_quantity(1.0, other, Unit::FreeText).is_err());
        }
    }

    #[test]
    fn test_price_inversion() {
        for category in UnitCategory::ALL {
            let members = category.members();
            for &a in members {
                for &b in members {
                    let p = 12.34;
                    let there = convert_price_per_unit(p, a, b).unwrap();
                    let back = convert_price_per_unit(there, b, a).unwrap();
                    assert!(approx(back, p, 1e-9), "{} -> {} -> {}", a, b, back);
                }
            }
        }
    }

    #[test]
    fn test_price_and_quantity_agree() {
        // Buying 2 lb at X per lb costs the same as buying the gram equivalent per gram
        let per_lb = 4.0;
        let per_g = convert_price_per_unit(per_lb, Unit::Lb, Unit::G).unwrap();
        let grams = convert_quantity(2.0, Unit::Lb, Unit::G).unwrap();
        assert!((grams * per_g - 2.0 * per_lb).abs() < 1e-9);
    }

    #[test]
    fn test_volume_conversions() {
        let ml = convert_quantity(2.0, Unit::Cup, Unit::Ml).unwrap();
        assert!((ml - 473.176).abs() < 1e-9);
        let cups = convert_quantity(1.0, Unit::Gallon, Unit::Cup).unwrap();
        assert!((cups - 16.0).abs() < 0.001);
    }
}
