//! Ingredient lines and recipe scaling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversion::Unit;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("servings must be a positive number, got {0}")]
    InvalidServings(f64),
}

/// A single ingredient line in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub food: String,
    /// Absent for free-text lines ("salt, to taste")
    pub quantity: Option<f64>,
    pub unit: Unit,
    pub note: Option<String>,
}

impl IngredientLine {
    /// Grouping key: trimmed, lower-cased food name
    pub fn food_key(&self) -> String {
        self.food.trim().to_lowercase()
    }

    /// Whether this line can take part in arithmetic
    pub fn is_measured(&self) -> bool {
        self.quantity.is_some() && !self.unit.is_free_text()
    }
}

/// A recipe's ingredient list with the servings it yields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredients {
    pub name: String,
    pub servings: f64,
    pub ingredients: Vec<IngredientLine>,
}

fn check_servings(servings: f64) -> Result<f64, ScaleError> {
    if servings.is_finite() && servings > 0.0 {
        Ok(servings)
    } else {
        Err(ScaleError::InvalidServings(servings))
    }
}

/// Factor to scale a recipe yielding `base` servings to `desired` servings
pub fn servings_multiplier(base: f64, desired: f64) -> Result<f64, ScaleError> {
    Ok(check_servings(desired)? / check_servings(base)?)
}

/// Scale every measured line by `multiplier`. Free-text lines are left as-is.
pub fn scale_lines(lines: &[IngredientLine], multiplier: f64) -> Vec<IngredientLine> {
    lines
        .iter()
        .map(|line| {
            let mut scaled = line.clone();
            if !line.unit.is_free_text() {
                scaled.quantity = line.quantity.map(|q| q * multiplier);
            }
            scaled
        })
        .collect()
}

/// Rescale a recipe to yield `desired_servings`
pub fn scale_recipe(
    recipe: &RecipeIngredients,
    desired_servings: f64,
) -> Result<RecipeIngredients, ScaleError> {
    let multiplier = servings_multiplier(recipe.servings, desired_servings)?;
    Ok(RecipeIngredients {
        name: recipe.name.clone(),
        servings: desired_servings,
        ingredients: scale_lines(&recipe.ingredients, multiplier),
    })
}
