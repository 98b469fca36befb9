pub mod derived;
pub mod entity;
pub mod invariants;

pub use derived::{derive_item, InventoryItemView};
pub use entity::{InventoryCandidate, InventoryItem};
pub use invariants::validate_inventory_item;
