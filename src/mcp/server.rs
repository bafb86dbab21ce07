//! Kitchen Units MCP Server Implementation
//!
//! Implements the MCP server with all unit conversion tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::tools::prices::{self, PriceOfferInput};
use crate::tools::recipes::{self, RecipeInput};
use crate::tools::status::StatusTracker;
use crate::tools::units;

/// Kitchen Units MCP Service
#[derive(Clone)]
pub struct KitchenService {
    config: Arc<Config>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<KitchenService>,
}

impl KitchenService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(&config)),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    /// Precision for display strings: the caller's, else the configured default
    fn precision(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.config.display_precision)
    }
}

/// Serialize a tool response as pretty JSON text content
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Tool failures are caller input problems; pass the message through verbatim
fn invalid(message: String) -> McpError {
    McpError::invalid_params(message, None)
}

// ============================================================================
// Unit Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnitPairParams {
    /// Unit to convert from (e.g. "g", "cups", "tbsp", "free-text")
    pub from_unit: String,
    /// Unit to convert to
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitParams {
    /// Quantity expressed in from_unit
    pub quantity: f64,
    /// Unit to convert from
    pub from_unit: String,
    /// Unit to convert to
    pub to_unit: String,
    /// Decimal places for the display string (default from server config)
    pub precision: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertPriceParams {
    /// Price of one from_unit
    pub price_per_unit: f64,
    /// Unit the price is quoted per
    pub from_unit: String,
    /// Unit to quote the price per
    pub to_unit: String,
    /// Decimal places for the display string (default from server config)
    pub precision: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatUnitParams {
    /// Unit identifier or common spelling
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RoundParams {
    /// Value to round
    pub value: f64,
    /// Decimal places (default 2)
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_precision() -> u32 { crate::conversion::DEFAULT_PRECISION }

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    /// Recipe to scale
    pub recipe: RecipeInput,
    /// Servings wanted
    pub desired_servings: f64,
    /// Decimal places for display strings (default from server config)
    pub precision: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BuildShoppingListParams {
    /// Recipes to shop for; set desired_servings on each to rescale
    pub recipes: Vec<RecipeInput>,
    /// Decimal places for display strings (default from server config)
    pub precision: Option<u32>,
}

// ============================================================================
// Price Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComparePricesParams {
    /// Offers to compare
    pub offers: Vec<PriceOfferInput>,
    /// Unit to compare prices per (e.g. "kg")
    pub target_unit: String,
    /// Decimal places for display strings (default from server config)
    pub precision: Option<u32>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl KitchenService {
    // --- Status ---

    #[tool(description = "Get the current status of the Kitchen Units service including version, unit catalog, configuration, and process information")]
    async fn kitchen_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for the unit conversion tools: supported units, categories, and conversion rules. Call this when unsure which units can be converted.")]
    fn unit_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNIT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(UNIT_INSTRUCTIONS)]))
    }

    // --- Units ---

    #[tool(description = "Check whether a quantity in one unit can be converted to another. Units convert only within the same category (weight, volume, spoon, count); free-text never converts.")]
    fn are_units_compatible(&self, Parameters(p): Parameters<UnitPairParams>) -> Result<CallToolResult, McpError> {
        let result = units::are_units_compatible(&p.from_unit, &p.to_unit).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Convert a quantity between compatible units, e.g. 2 lb to g. Returns the exact result and a rounded display string.")]
    fn convert_unit(&self, Parameters(p): Parameters<ConvertUnitParams>) -> Result<CallToolResult, McpError> {
        let result = units::convert_unit(p.quantity, &p.from_unit, &p.to_unit, self.precision(p.precision))
            .map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Convert a price per unit into a price per another compatible unit, e.g. price per kg to price per g")]
    fn convert_price_per_unit(&self, Parameters(p): Parameters<ConvertPriceParams>) -> Result<CallToolResult, McpError> {
        let result = units::convert_price(p.price_per_unit, &p.from_unit, &p.to_unit, self.precision(p.precision))
            .map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Get the human-readable plural name of a unit (e.g. fl-oz -> fluid ounces). Unknown units are echoed back.")]
    fn format_unit(&self, Parameters(p): Parameters<FormatUnitParams>) -> Result<CallToolResult, McpError> {
        json_result(&units::format_unit(&p.unit))
    }

    #[tool(description = "Round a value for display (half away from zero). Never feed rounded values back into conversions.")]
    fn round_to_precision(&self, Parameters(p): Parameters<RoundParams>) -> Result<CallToolResult, McpError> {
        let result = units::round_value(p.value, p.precision).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "List every supported unit grouped by category, with conversion factors and display names")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        json_result(&units::list_units())
    }

    // --- Recipes ---

    #[tool(description = "Scale a recipe's ingredient list to a different number of servings")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::scale_recipe(&p.recipe, p.desired_servings, self.precision(p.precision))
            .map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Build a shopping list from several recipes, each optionally rescaled. Quantities of the same food in compatible units are added together.")]
    fn build_shopping_list(&self, Parameters(p): Parameters<BuildShoppingListParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::build_shopping_list(&p.recipes, self.precision(p.precision))
            .map_err(invalid)?;
        json_result(&result)
    }

    // --- Prices ---

    #[tool(description = "Rank package offers by price per target unit. Offers in incompatible units are listed as rejected.")]
    fn compare_prices(&self, Parameters(p): Parameters<ComparePricesParams>) -> Result<CallToolResult, McpError> {
        let result = prices::compare_prices(&p.offers, &p.target_unit, self.precision(p.precision))
            .map_err(invalid)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for KitchenService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server_name.clone(),
                version: crate::service_info::VERSION.into(),
                title: Some("Kitchen Units".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Kitchen Units - recipe unit conversion, scaling, and price comparison. \
                 Call unit_instructions for the supported units and conversion rules. \
                 Units: are_units_compatible, convert_unit, convert_price_per_unit, format_unit, \
                 round_to_precision, list_units. \
                 Recipes: scale_recipe, build_shopping_list. \
                 Prices: compare_prices. \
                 Conversion errors are input problems; show them to the user verbatim."
                    .into(),
            ),
        }
    }
}
