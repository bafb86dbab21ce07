//! Package price comparison

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversion::{convert_price_per_unit, ConversionError, Unit};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("package quantity must be a positive number, got {0}")]
    InvalidPackageQuantity(f64),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A product offer: `price` buys `package_quantity` of `unit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOffer {
    pub label: String,
    pub price: f64,
    pub package_quantity: f64,
    pub unit: Unit,
}

/// An offer normalized to a common unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOffer {
    pub label: String,
    pub price_per_unit: f64,
}

/// An offer that could not be normalized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedOffer {
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceComparison {
    pub target_unit: Unit,
    /// Cheapest first
    pub ranked: Vec<RankedOffer>,
    pub rejected: Vec<RejectedOffer>,
}

/// Price of one `target` unit under this offer
pub fn price_per_unit(offer: &PriceOffer, target: Unit) -> Result<f64, PriceError> {
    if !(offer.package_quantity.is_finite() && offer.package_quantity > 0.0) {
        return Err(PriceError::InvalidPackageQuantity(offer.package_quantity));
    }
    let per_package_unit = offer.price / offer.package_quantity;
    Ok(convert_price_per_unit(per_package_unit, offer.unit, target)?)
}

/// Rank offers by price per `target` unit. Offers that cannot be expressed in
/// `target` are reported, not fatal.
pub fn compare_offers(offers: &[PriceOffer], target: Unit) -> PriceComparison {
    let mut ranked = Vec::new();
    let mut rejected = Vec::new();

    for offer in offers {
        match price_per_unit(offer, target) {
            Ok(price) => ranked.push(RankedOffer {
                label: offer.label.clone(),
                price_per_unit: price,
            }),
            Err(e) => rejected.push(RejectedOffer {
                label: offer.label.clone(),
                reason: e.to_string(),
            }),
        }
    }

    ranked.sort_by(|a, b| a.price_per_unit.total_cmp(&b.price_per_unit));

    PriceComparison {
        target_unit: target,
        ranked,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(label: &str, price: f64, package_quantity: f64, unit: Unit) -> PriceOffer {
        PriceOffer {
            label: label.to_string(),
            price,
            package_quantity,
            unit,
        }
    }

    #[test]
    fn test_price_per_unit() {
        // 2.5 kg bag for 5.00 -> 0.002 per gram
        let p = price_per_unit(&offer("bag", 5.0, 2.5, Unit::Kg), Unit::G).unwrap();
        assert!((p - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_package_quantity() {
        let err = price_per_unit(&offer("x", 1.0, 0.0, Unit::G), Unit::G).unwrap_err();
        assert_eq!(err, PriceError::InvalidPackageQuantity(0.0));
    }

    #[test]
    fn test_compare_offers_ranks_and_rejects() {
        let offers = vec![
            offer("1 lb block", 4.0, 1.0, Unit::Lb),
            offer("500 g tub", 3.0, 500.0, Unit::G),
            offer("1 cup carton", 2.0, 1.0, Unit::Cup),
        ];
        let result = compare_offers(&offers, Unit::Kg);
        assert_eq!(result.target_unit, Unit::Kg);
        assert_eq!(result.ranked.len(), 2);
        assert_eq!(result.ranked[0].label, "500 g tub");
        assert!((result.ranked[0].price_per_unit - 6.0).abs() < 1e-9);
        assert!((result.ranked[1].price_per_unit - 4.0 / 0.453592).abs() < 1e-9);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].label, "1 cup carton");
        assert_eq!(
            result.rejected[0].reason,
            "cannot convert cup to kg: units are not compatible"
        );
    }
}
