// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are page view models handed to the rendering side
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{InventoryItemView, Recipe};
use crate::services::{RecipeFilter, ScaledIngredients};

// ============================================================================
// QUERY PARAMETERS
// ============================================================================

/// `GET /recipes` parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeListParams {
    pub meal_type: Option<String>,
    pub cuisine_type: Option<String>,
    pub difficulty: Option<String>,
    pub flash: Option<String>,
    pub id: Option<String>,
}

impl RecipeListParams {
    pub fn flash_params(&self) -> FlashParams {
        FlashParams {
            flash: self.flash.clone(),
            id: self.id.clone(),
        }
    }
}

/// `GET /recipes/search` parameters.
/// Absent and empty are different: an empty `query` still runs a search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub scale: Option<String>,
}

/// Flash parameters carried by the post-delete redirect
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlashParams {
    pub flash: Option<String>,
    pub id: Option<String>,
}

// ============================================================================
// FLASH MESSAGES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

impl FlashParams {
    /// Turn redirect parameters into a message for the page.
    /// `resource` names the record type ("Recipe", "Inventory item").
    pub fn into_message(self, resource: &str) -> Option<FlashMessage> {
        match self.flash.as_deref()? {
            "deleted" => Some(FlashMessage {
                kind: FlashKind::Success,
                message: match self.id {
                    Some(id) => format!("{} {} deleted", resource, id),
                    None => format!("{} deleted", resource),
                },
            }),
            "not_found" => Some(FlashMessage {
                kind: FlashKind::Error,
                message: format!("{} not found", resource),
            }),
            _ => None,
        }
    }
}

// ============================================================================
// RECIPE PAGES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListPage {
    pub recipes: Vec<Recipe>,
    pub filters: RecipeFilter,
    pub total: usize,
    pub flash: Option<FlashMessage>,
}

/// A search result with its ingredients previewed at the requested scale
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub scaled_servings: u64,
    pub scaled_ingredients: Vec<String>,
}

impl SearchHit {
    pub fn new(recipe: &Recipe, scaled: ScaledIngredients) -> Self {
        Self {
            recipe: recipe.clone(),
            scaled_servings: scaled.scaled_servings,
            scaled_ingredients: scaled.ingredients,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// False until the visitor submits the search form
    pub searched: bool,
    pub query: Option<String>,
    pub scale: f64,
    pub results: Vec<SearchHit>,
}

// ============================================================================
// INVENTORY PAGES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListPage {
    pub items: Vec<InventoryItemView>,
    pub total: usize,
    /// Sum of every line value
    pub total_value: f64,
    pub flash: Option<FlashMessage>,
}

impl InventoryListPage {
    pub fn new(items: Vec<InventoryItemView>, flash: Option<FlashMessage>) -> Self {
        let total_value = items.iter().map(|view| view.line_value).sum();
        Self {
            total: items.len(),
            items,
            total_value,
            flash,
        }
    }
}
