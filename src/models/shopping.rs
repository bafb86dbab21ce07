//! Shopping list aggregation
//!
//! Combines ingredient lines from several recipes, each scaled by its own
//! servings multiplier, summing quantities whose units are compatible.

use serde::Serialize;

use crate::conversion::{are_compatible, convert_quantity, ConversionResult, Unit};

use super::ingredient::{servings_multiplier, IngredientLine, RecipeIngredients, ScaleError};

/// A recipe picked for the shopping list, optionally rescaled
#[derive(Debug, Clone)]
pub struct RecipeSelection {
    pub recipe: RecipeIngredients,
    /// Servings to shop for; defaults to the recipe's own yield
    pub desired_servings: Option<f64>,
}

/// One aggregated shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub food: String,
    pub quantity: Option<f64>,
    pub unit: Unit,
    /// Recipes contributing to this entry, first-seen order
    pub recipes: Vec<String>,
    pub notes: Vec<String>,
}

impl ShoppingItem {
    fn from_line(line: &IngredientLine, recipe: &str) -> Self {
        Self {
            food: line.food.trim().to_string(),
            quantity: if line.unit.is_free_text() { None } else { line.quantity },
            unit: line.unit,
            recipes: vec![recipe.to_string()],
            notes: line.note.iter().cloned().collect(),
        }
    }

    fn key(&self) -> String {
        self.food.to_lowercase()
    }

    /// Whether `line` can be folded into this entry
    fn accepts(&self, line: &IngredientLine) -> bool {
        if self.key() != line.food_key() {
            return false;
        }
        if self.unit.is_free_text() || line.unit.is_free_text() {
            return self.unit.is_free_text() && line.unit.is_free_text();
        }
        self.quantity.is_some() && line.is_measured() && are_compatible(line.unit, self.unit)
    }

    fn absorb(&mut self, line: &IngredientLine, recipe: &str) -> ConversionResult<()> {
        if let (Some(total), Some(quantity)) = (self.quantity, line.quantity) {
            self.quantity = Some(total + convert_quantity(quantity, line.unit, self.unit)?);
        }
        if !self.recipes.iter().any(|r| r == recipe) {
            self.recipes.push(recipe.to_string());
        }
        if let Some(note) = &line.note {
            if !self.notes.contains(note) {
                self.notes.push(note.clone());
            }
        }
        Ok(())
    }
}

/// Failure building a shopping list
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShoppingListError {
    #[error("recipe '{recipe}': {source}")]
    Scale {
        recipe: String,
        #[source]
        source: ScaleError,
    },

    #[error(transparent)]
    Conversion(#[from] crate::conversion::ConversionError),
}

/// Aggregate the scaled ingredients of every selected recipe.
///
/// Lines for the same food merge when their units are compatible; the first
/// unit seen for a food is the unit it is totalled in. Incompatible lines
/// (cups of flour vs grams of flour) stay as separate entries.
pub fn build_shopping_list(
    selections: &[RecipeSelection],
) -> Result<Vec<ShoppingItem>, ShoppingListError> {
    let mut items: Vec<ShoppingItem> = Vec::new();

    for selection in selections {
        let recipe = &selection.recipe;
        let desired = selection.desired_servings.unwrap_or(recipe.servings);
        let multiplier =
            servings_multiplier(recipe.servings, desired).map_err(|source| {
                ShoppingListError::Scale {
                    recipe: recipe.name.clone(),
                    source,
                }
            })?;

        for line in super::ingredient::scale_lines(&recipe.ingredients, multiplier) {
            match items.iter_mut().find(|item| item.accepts(&line)) {
                Some(item) => item.absorb(&line, &recipe.name)?,
                None => items.push(ShoppingItem::from_line(&line, &recipe.name)),
            }
        }
    }

    tracing::debug!(
        "Built shopping list with {} items from {} recipes",
        items.len(),
        selections.len()
    );
    Ok(items)
}
