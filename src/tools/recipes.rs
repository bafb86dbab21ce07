//! Recipe MCP Tools
//!
//! Tools for rescaling recipes and building aggregated shopping lists.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::conversion::{format_quantity, Unit};
use crate::models::{
    build_shopping_list as aggregate, scale_recipe as rescale, IngredientLine, RecipeIngredients,
    RecipeSelection, ShoppingItem,
};

use super::units::parse_unit;

/// Ingredient line as supplied by a caller, with the unit still a string
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct IngredientInput {
    /// Food name, e.g. "flour"
    pub food: String,
    /// Amount; omit for free-text lines
    pub quantity: Option<f64>,
    /// Unit such as "g", "cups", "tbsp". Omitted or empty means free text, which takes no quantity
    #[serde(default)]
    pub unit: String,
    /// Optional note ("to taste", "softened")
    pub note: Option<String>,
}

/// Recipe as supplied by a caller
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct RecipeInput {
    /// Recipe name
    pub name: String,
    /// Servings the ingredient list yields
    pub servings: f64,
    pub ingredients: Vec<IngredientInput>,
    /// Servings to shop for (shopping lists only; defaults to servings)
    pub desired_servings: Option<f64>,
}

/// An ingredient line with a display string
#[derive(Debug, Serialize)]
pub struct IngredientDetail {
    #[serde(flatten)]
    pub line: IngredientLine,
    pub display: String,
}

/// Response for scale_recipe
#[derive(Debug, Serialize)]
pub struct ScaleRecipeResponse {
    pub name: String,
    pub original_servings: f64,
    pub servings: f64,
    pub multiplier: f64,
    pub ingredients: Vec<IngredientDetail>,
}

/// A shopping list entry with a display string
#[derive(Debug, Serialize)]
pub struct ShoppingItemDetail {
    #[serde(flatten)]
    pub item: ShoppingItem,
    pub display: String,
}

/// Response for build_shopping_list
#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingItemDetail>,
    pub item_count: usize,
    pub recipe_count: usize,
}

fn to_line(input: &IngredientInput) -> Result<IngredientLine, String> {
    let unit = parse_unit(&input.unit).map_err(|e| format!("ingredient '{}': {}", input.food, e))?;
    if let Some(q) = input.quantity {
        if !q.is_finite() {
            return Err(format!("ingredient '{}': quantity must be a finite number", input.food));
        }
        if unit.is_free_text() {
            let problem = if input.unit.trim().is_empty() {
                "quantity given without a unit"
            } else {
                "free-text ingredients cannot have a quantity"
            };
            return Err(format!("ingredient '{}': {}", input.food, problem));
        }
    }
    Ok(IngredientLine {
        food: input.food.clone(),
        quantity: input.quantity,
        unit,
        note: input.note.clone(),
    })
}

fn to_recipe(input: &RecipeInput) -> Result<RecipeIngredients, String> {
    Ok(RecipeIngredients {
        name: input.name.clone(),
        servings: input.servings,
        ingredients: input.ingredients.iter().map(to_line).collect::<Result<_, _>>()?,
    })
}

fn display_line(quantity: Option<f64>, unit: Unit, food: &str, precision: u32) -> String {
    match quantity {
        Some(q) if !unit.is_free_text() => {
            format!("{} {}", format_quantity(q, unit, precision), food)
        }
        _ => food.to_string(),
    }
}

pub fn scale_recipe(
    input: &RecipeInput,
    desired_servings: f64,
    precision: u32,
) -> Result<ScaleRecipeResponse, String> {
    let recipe = to_recipe(input)?;
    let scaled = rescale(&recipe, desired_servings).map_err(|e| e.to_string())?;

    let ingredients = scaled
        .ingredients
        .into_iter()
        .map(|line| IngredientDetail {
            display: display_line(line.quantity, line.unit, &line.food, precision),
            line,
        })
        .collect();

    Ok(ScaleRecipeResponse {
        name: scaled.name,
        original_servings: recipe.servings,
        servings: scaled.servings,
        multiplier: desired_servings / recipe.servings,
        ingredients,
    })
}

pub fn build_shopping_list(
    inputs: &[RecipeInput],
    precision: u32,
) -> Result<ShoppingListResponse, String> {
    let selections = inputs
        .iter()
        .map(|input| {
            Ok(RecipeSelection {
                recipe: to_recipe(input)?,
                desired_servings: input.desired_servings,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let items: Vec<ShoppingItemDetail> = aggregate(&selections)
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|item| ShoppingItemDetail {
            display: display_line(item.quantity, item.unit, &item.food, precision),
            item,
        })
        .collect();

    Ok(ShoppingListResponse {
        item_count: items.len(),
        recipe_count: inputs.len(),
        items,
    })
}
