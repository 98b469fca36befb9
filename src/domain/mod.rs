// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod dates;
pub mod identifiers;
pub mod inventory;
pub mod recipe;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Identifiers
pub use identifiers::{format_id, parse_id_number, IdKind};

// Recipe Domain
pub use recipe::{validate_recipe, Difficulty, Recipe, RecipeCandidate};

// Inventory Domain
pub use inventory::{
    derive_item, validate_inventory_item, InventoryCandidate, InventoryItem, InventoryItemView,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of entity constraints. Each carries exactly one
/// failing field: validation stops at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Name of the field that failed
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::Validation { field, .. } => field,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
