// src/services/mod.rs
//
// Services Module - stateless query logic over repository contents

pub mod recipe_query;

pub use recipe_query::{
    clamp_scale, filter_recipes, parse_scale, scale_line, scale_recipe, scale_servings,
    search_recipes, RecipeFilter, ScaledIngredients, SearchState, Selector, MAX_SCALE, MIN_SCALE,
    WILDCARD,
};
