//! Price comparison MCP Tools

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::conversion::{round_to_precision, Unit};
use crate::models::{compare_offers, PriceComparison, PriceOffer};

use super::units::parse_unit;

/// A product offer as supplied by a caller
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct PriceOfferInput {
    /// Label shown in the result, e.g. "Store brand 2 lb bag"
    pub label: String,
    /// Price of the whole package
    pub price: f64,
    /// Amount in the package, in `unit`
    pub package_quantity: f64,
    /// Unit of the package amount ("g", "lb", "l", ...)
    pub unit: String,
}

/// Ranked offer with a display string
#[derive(Debug, Serialize)]
pub struct RankedOfferDetail {
    pub rank: usize,
    pub label: String,
    pub price_per_unit: f64,
    pub display: String,
}

/// Response for compare_prices
#[derive(Debug, Serialize)]
pub struct ComparePricesResponse {
    pub target_unit: Unit,
    pub ranked: Vec<RankedOfferDetail>,
    pub rejected: Vec<crate::models::RejectedOffer>,
    pub cheapest: Option<String>,
}

pub fn compare_prices(
    offers: &[PriceOfferInput],
    target_unit: &str,
    precision: u32,
) -> Result<ComparePricesResponse, String> {
    let target = parse_unit(target_unit)?;
    let parsed = offers
        .iter()
        .map(|o| {
            Ok(PriceOffer {
                label: o.label.clone(),
                price: o.price,
                package_quantity: o.package_quantity,
                unit: parse_unit(&o.unit).map_err(|e| format!("offer '{}': {}", o.label, e))?,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let PriceComparison {
        target_unit,
        ranked,
        rejected,
    } = compare_offers(&parsed, target);

    let ranked: Vec<RankedOfferDetail> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, offer)| RankedOfferDetail {
            rank: i + 1,
            display: format!(
                "{} per {}",
                round_to_precision(offer.price_per_unit, precision),
                target_unit
            ),
            label: offer.label,
            price_per_unit: offer.price_per_unit,
        })
        .collect();

    Ok(ComparePricesResponse {
        target_unit,
        cheapest: ranked.first().map(|o| o.label.clone()),
        ranked,
        rejected,
    })
}
