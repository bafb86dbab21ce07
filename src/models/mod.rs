//! Data models
//!
//! Ingredient lines, recipe scaling, shopping lists, and price offers.

pub mod ingredient;
pub mod price;
pub mod shopping;

pub use ingredient::{
    scale_lines, scale_recipe, servings_multiplier, IngredientLine, RecipeIngredients, ScaleError,
};
pub use price::{
    compare_offers, price_per_unit, PriceComparison, PriceError, PriceOffer, RankedOffer,
    RejectedOffer,
};
pub use shopping::{build_shopping_list, RecipeSelection, ShoppingItem, ShoppingListError};
