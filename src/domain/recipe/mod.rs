pub mod entity;
pub mod invariants;

pub use entity::{Difficulty, Recipe, RecipeCandidate};
pub use invariants::validate_recipe;
