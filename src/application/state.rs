// src/application/state.rs

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::repositories::{
    seed_inventory, seed_recipes, InMemoryInventoryRepository, InMemoryRecipeRepository,
    InventoryRepository, RecipeRepository,
};

/// Application state shared by every command.
/// Each repository sits behind its own lock: reads share it, `add` and
/// `delete` hold the write guard for the whole operation.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<RwLock<dyn RecipeRepository>>,
    pub inventory: Arc<RwLock<dyn InventoryRepository>>,
}

impl AppState {
    pub fn new<R, I>(recipes: R, inventory: I) -> Self
    where
        R: RecipeRepository + 'static,
        I: InventoryRepository + 'static,
    {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
            inventory: Arc::new(RwLock::new(inventory)),
        }
    }

    /// Stores loaded with the fixed seed set
    pub fn seeded() -> Self {
        Self::new(
            InMemoryRecipeRepository::with_seed(seed_recipes()),
            InMemoryInventoryRepository::with_seed(seed_inventory()),
        )
    }

    pub fn empty() -> Self {
        Self::new(InMemoryRecipeRepository::new(), InMemoryInventoryRepository::new())
    }
}
