// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Each repository exclusively owns one ordered collection
// - Callers get shared references or owned copies, never `&mut` into storage
// - `add` is all-or-nothing: validation runs before anything is stored
// - No locking here; callers serialize mutations
// - NO cross-repository calls

pub mod inventory_repository;
pub mod raw_input;
pub mod recipe_repository;
pub mod seed;

pub use inventory_repository::{InMemoryInventoryRepository, InventoryRepository};
pub use raw_input::{
    FieldValue, RawInventoryInput, RawRecipeInput, DEFAULT_LOCATION, DEFAULT_USER_ID,
};
pub use recipe_repository::{InMemoryRecipeRepository, RecipeRepository};
pub use seed::{seed_inventory, seed_recipes};
