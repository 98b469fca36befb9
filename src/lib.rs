// src/lib.rs
// KitchenHub - Recipe box and kitchen inventory demo server
//
// Architecture:
// - Domain-centric: entity rules live in the domain and nowhere else
// - Repositories own their collections; validation gates every insert
// - Services are pure queries over repository contents
// - Application layer: HTTP boundary, locking and configuration
// - Explicit: No implicit behavior, no magic

// ============================================================================
// CORE
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod logging;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    derive_item,
    format_id,
    validate_inventory_item,
    validate_recipe,
    Difficulty,
    DomainError,
    DomainResult,
    IdKind,
    // Inventory
    InventoryCandidate,
    InventoryItem,
    InventoryItemView,
    // Recipe
    Recipe,
    RecipeCandidate,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, FieldIssue};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    seed_inventory,
    seed_recipes,
    FieldValue,
    InMemoryInventoryRepository,
    InMemoryRecipeRepository,
    InventoryRepository,
    RawInventoryInput,
    RawRecipeInput,
    RecipeRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    clamp_scale, filter_recipes, scale_line, scale_recipe, search_recipes, RecipeFilter,
    ScaledIngredients, SearchState, Selector,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{create_router, AppState, CliArgs, ServerConfig};
pub use logging::init_logging;
