//! Unit conversion MCP Tools
//!
//! Tools for checking unit compatibility, converting quantities and prices,
//! and formatting units for display.

use serde::Serialize;

use crate::conversion::{
    are_compatible, category_of, conversion_factor, convert_price_per_unit, convert_quantity,
    display_name, format_quantity, format_unit_str, round_to_precision, Unit, UnitCategory,
};

/// Parse a unit string, mapping the failure to a user-facing message
pub fn parse_unit(raw: &str) -> Result<Unit, String> {
    raw.parse::<Unit>().map_err(|e| e.to_string())
}

/// Response for are_units_compatible
#[derive(Debug, Serialize)]
pub struct CompatibilityResponse {
    pub from_unit: Unit,
    pub to_unit: Unit,
    pub compatible: bool,
    pub from_category: Option<UnitCategory>,
    pub to_category: Option<UnitCategory>,
}

/// Response for convert_unit
#[derive(Debug, Serialize)]
pub struct ConvertUnitResponse {
    pub quantity: f64,
    pub from_unit: Unit,
    pub to_unit: Unit,
    /// Unrounded result; use this for any further arithmetic
    pub result: f64,
    /// Rounded, human-readable result
    pub display: String,
}

/// Response for convert_price_per_unit
#[derive(Debug, Serialize)]
pub struct ConvertPriceResponse {
    pub price_per_unit: f64,
    pub from_unit: Unit,
    pub to_unit: Unit,
    pub result: f64,
    pub display: String,
}

/// Response for format_unit
#[derive(Debug, Serialize)]
pub struct FormatUnitResponse {
    pub unit: String,
    pub display_name: String,
    pub recognized: bool,
}

/// Response for round_to_precision
#[derive(Debug, Serialize)]
pub struct RoundResponse {
    pub value: f64,
    pub precision: u32,
    pub result: f64,
}

/// Catalog entry for list_units
#[derive(Debug, Serialize)]
pub struct UnitEntry {
    pub unit: Unit,
    pub display_name: &'static str,
    /// Base units per one of this unit; absent for free-text
    pub factor: Option<f64>,
}

/// One category in list_units
#[derive(Debug, Serialize)]
pub struct UnitCategoryEntry {
    pub category: UnitCategory,
    pub base_unit: Option<Unit>,
    pub units: Vec<UnitEntry>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub categories: Vec<UnitCategoryEntry>,
}

pub fn are_units_compatible(from: &str, to: &str) -> Result<CompatibilityResponse, String> {
    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;
    Ok(CompatibilityResponse {
        from_unit,
        to_unit,
        compatible: are_compatible(from_unit, to_unit),
        from_category: category_of(from_unit),
        to_category: category_of(to_unit),
    })
}

pub fn convert_unit(
    quantity: f64,
    from: &str,
    to: &str,
    precision: u32,
) -> Result<ConvertUnitResponse, String> {
    check_finite("quantity", quantity)?;
    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;

    let result = convert_quantity(quantity, from_unit, to_unit).map_err(|e| {
        tracing::warn!("Rejected conversion of {} {} to {}: {}", quantity, from_unit, to_unit, e);
        e.to_string()
    })?;
    check_result(quantity, from_unit, to_unit, result)?;

    Ok(ConvertUnitResponse {
        quantity,
        from_unit,
        to_unit,
        result,
        display: format_quantity(result, to_unit, precision),
    })
}

pub fn convert_price(
    price_per_unit: f64,
    from: &str,
    to: &str,
    precision: u32,
) -> Result<ConvertPriceResponse, String> {
    check_finite("price_per_unit", price_per_unit)?;
    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;

    let result = convert_price_per_unit(price_per_unit, from_unit, to_unit).map_err(|e| {
        tracing::warn!("Rejected price conversion from {} to {}: {}", from_unit, to_unit, e);
        e.to_string()
    })?;
    check_result(price_per_unit, from_unit, to_unit, result)?;

    let unit_label = match to_unit {
        Unit::FreeText => display_name(to_unit).to_string(),
        other => other.as_str().to_string(),
    };

    Ok(ConvertPriceResponse {
        price_per_unit,
        from_unit,
        to_unit,
        result,
        display: format!("{} per {}", round_to_precision(result, precision), unit_label),
    })
}

pub fn format_unit(unit: &str) -> FormatUnitResponse {
    FormatUnitResponse {
        unit: unit.to_string(),
        display_name: format_unit_str(unit),
        recognized: unit.parse::<Unit>().is_ok(),
    }
}

pub fn round_value(value: f64, precision: u32) -> Result<RoundResponse, String> {
    check_finite("value", value)?;
    Ok(RoundResponse {
        value,
        precision,
        result: round_to_precision(value, precision),
    })
}

pub fn list_units() -> ListUnitsResponse {
    let categories = UnitCategory::ALL
        .into_iter()
        .map(|category| UnitCategoryEntry {
            category,
            base_unit: category.base_unit(),
            units: category
                .members()
                .iter()
                .map(|&unit| UnitEntry {
                    unit,
                    display_name: display_name(unit),
                    factor: conversion_factor(unit),
                })
                .collect(),
        })
        .collect();
    ListUnitsResponse { categories }
}

/// Reject conversions that overflow f64
fn check_result(input: f64, from: Unit, to: Unit, result: f64) -> Result<(), String> {
    if result.is_finite() {
        Ok(())
    } else {
        Err(format!("{} {} is too large to express in {}", input, from, to))
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be a finite number", field))
    }
}
