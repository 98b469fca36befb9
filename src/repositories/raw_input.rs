// src/repositories/raw_input.rs
//
// Raw submitted payloads and their normalization into entity candidates.
//
// A raw payload is whatever the caller sent: every field optional, numbers
// possibly still text, some fields under alternate names. Normalization
// (alias resolution, defaulting, coercion, list splitting) happens here and
// only here; validation happens when the candidate is turned into an entity.

use serde::Deserialize;

use crate::domain::{InventoryCandidate, RecipeCandidate};

/// Owner recorded on inventory items submitted without a `userId`.
/// A placeholder identity, not an authentication mechanism.
pub const DEFAULT_USER_ID: &str = "demo-user";

/// Location recorded on inventory items submitted without one
pub const DEFAULT_LOCATION: &str = "Unknown";

/// A single submitted value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Text form of the value, trimmed
    pub fn text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.trim().to_string(),
            FieldValue::List(items) => items.join("\n").trim().to_string(),
        }
    }

    /// Coerce to a number. Blank or unparseable text becomes NaN, which the
    /// entity validators reject.
    pub fn number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            FieldValue::List(_) => f64::NAN,
        }
    }

    /// Split free text into lines on newlines or commas, trimming each
    /// piece and dropping empty ones
    pub fn lines(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.iter().flat_map(|item| split_lines(item)).collect(),
            other => split_lines(&other.text()),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(_) => false,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Present and not blank
pub(crate) fn present(value: &Option<FieldValue>) -> Option<&FieldValue> {
    value.as_ref().filter(|v| !v.is_blank())
}

fn text_or_empty(value: &Option<FieldValue>) -> String {
    value.as_ref().map(FieldValue::text).unwrap_or_default()
}

fn number_or_nan(value: &Option<FieldValue>) -> f64 {
    present(value).map(FieldValue::number).unwrap_or(f64::NAN)
}

// ============================================================================
// RECIPE PAYLOAD
// ============================================================================

/// Recipe fields as submitted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecipeInput {
    pub title: Option<FieldValue>,
    pub chef: Option<FieldValue>,
    pub ingredients: Option<FieldValue>,
    pub instructions: Option<FieldValue>,
    pub meal_type: Option<FieldValue>,
    pub cuisine_type: Option<FieldValue>,
    pub prep_time: Option<FieldValue>,
    pub difficulty: Option<FieldValue>,
    pub servings: Option<FieldValue>,
    /// Accepted but ignored: the repository stamps the creation date
    pub created_date: Option<FieldValue>,
}

impl RawRecipeInput {
    /// Normalize into a candidate carrying the repository-assigned id and date
    pub fn into_candidate(self, recipe_id: String, created_date: String) -> RecipeCandidate {
        RecipeCandidate {
            recipe_id,
            title: text_or_empty(&self.title),
            chef: text_or_empty(&self.chef),
            ingredients: self.ingredients.as_ref().map(FieldValue::lines).unwrap_or_default(),
            instructions: self
                .instructions
                .as_ref()
                .map(FieldValue::lines)
                .unwrap_or_default(),
            meal_type: text_or_empty(&self.meal_type),
            cuisine_type: text_or_empty(&self.cuisine_type),
            prep_time: number_or_nan(&self.prep_time),
            difficulty: text_or_empty(&self.difficulty),
            servings: number_or_nan(&self.servings),
            created_date,
        }
    }
}

// ============================================================================
// INVENTORY PAYLOAD
// ============================================================================

/// Inventory fields as submitted, including alias names
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInventoryInput {
    pub user_id: Option<FieldValue>,
    pub ingredient_name: Option<FieldValue>,
    /// Alias of `ingredientName`
    pub name: Option<FieldValue>,
    pub quantity: Option<FieldValue>,
    pub unit: Option<FieldValue>,
    pub category: Option<FieldValue>,
    pub location: Option<FieldValue>,
    pub cost: Option<FieldValue>,
    /// Alias of `cost`
    pub price_per_unit: Option<FieldValue>,
    pub purchase_date: Option<FieldValue>,
    pub expiration_date: Option<FieldValue>,
    /// Alias of `expirationDate`
    pub expiry: Option<FieldValue>,
    pub created_date: Option<FieldValue>,
}

impl RawInventoryInput {
    /// `ingredientName`, falling back to `name`
    pub fn resolved_name(&self) -> Option<&FieldValue> {
        present(&self.ingredient_name).or_else(|| present(&self.name))
    }

    /// `cost`, falling back to `pricePerUnit`
    pub fn resolved_cost(&self) -> Option<&FieldValue> {
        present(&self.cost).or_else(|| present(&self.price_per_unit))
    }

    /// `expirationDate`, falling back to `expiry`
    pub fn resolved_expiration(&self) -> Option<&FieldValue> {
        present(&self.expiration_date).or_else(|| present(&self.expiry))
    }

    /// Resolve aliases and apply defaults.
    /// `today` fills `purchaseDate` and `createdDate` when they are absent.
    pub fn into_candidate(self, inventory_id: String, today: &str) -> InventoryCandidate {
        let ingredient_name = self.resolved_name().map(FieldValue::text).unwrap_or_default();
        let cost = self.resolved_cost().map(FieldValue::number).unwrap_or(0.0);
        let expiration_date = self.resolved_expiration().map(FieldValue::text);

        InventoryCandidate {
            inventory_id,
            user_id: present(&self.user_id)
                .map(FieldValue::text)
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            ingredient_name,
            quantity: number_or_nan(&self.quantity),
            unit: text_or_empty(&self.unit),
            category: text_or_empty(&self.category),
            location: present(&self.location)
                .map(FieldValue::text)
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            cost,
            purchase_date: Some(
                present(&self.purchase_date)
                    .map(FieldValue::text)
                    .unwrap_or_else(|| today.to_string()),
            ),
            expiration_date,
            created_date: present(&self.created_date)
                .map(FieldValue::text)
                .unwrap_or_else(|| today.to_string()),
        }
    }
}
