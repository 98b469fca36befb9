use serde::Serialize;

use super::invariants::validate_inventory_item;
use crate::domain::DomainResult;

/// A stocked ingredient in the kitchen inventory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// `I-` followed by five digits
    pub inventory_id: String,

    /// Owner of the item. No authentication is involved.
    pub user_id: String,

    pub ingredient_name: String,

    /// Amount on hand, in `unit`
    pub quantity: f64,

    pub unit: String,

    pub category: String,

    /// Where it is kept ("Fridge", "Pantry")
    pub location: String,

    /// Cost per unit
    pub cost: f64,

    /// `YYYY-MM-DD`
    pub purchase_date: Option<String>,

    /// `YYYY-MM-DD`, never before `purchase_date`
    pub expiration_date: Option<String>,

    /// `YYYY-MM-DD`
    pub created_date: String,
}

/// Unvalidated inventory fields after alias resolution and defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryCandidate {
    pub inventory_id: String,
    pub user_id: String,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub location: String,
    pub cost: f64,
    pub purchase_date: Option<String>,
    pub expiration_date: Option<String>,
    pub created_date: String,
}

impl InventoryItem {
    /// Build an InventoryItem from candidate fields.
    /// This is the only way to construct a valid InventoryItem
    pub fn new(candidate: InventoryCandidate) -> DomainResult<Self> {
        let item = Self {
            inventory_id: candidate.inventory_id,
            user_id: candidate.user_id,
            ingredient_name: candidate.ingredient_name,
            quantity: candidate.quantity,
            unit: candidate.unit,
            category: candidate.category,
            location: candidate.location,
            cost: candidate.cost,
            purchase_date: candidate.purchase_date,
            expiration_date: candidate.expiration_date,
            created_date: candidate.created_date,
        };
        validate_inventory_item(&item)?;
        Ok(item)
    }

    /// quantity × cost
    pub fn line_value(&self) -> f64 {
        self.quantity * self.cost
    }
}

impl std::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.quantity, self.unit, self.ingredient_name, self.inventory_id
        )
    }
}
