// src/repositories/inventory_repository.rs
//
// Inventory storage - in-memory, insertion ordered

use chrono::NaiveDateTime;

use crate::domain::dates::today_string;
use crate::domain::identifiers::{next_id, IdKind};
use crate::domain::{derive_item, DomainResult, InventoryItem, InventoryItemView};
use crate::repositories::raw_input::RawInventoryInput;

pub trait InventoryRepository: Send + Sync {
    fn list(&self) -> &[InventoryItem];
    fn find_by_id(&self, id: &str) -> Option<&InventoryItem>;
    /// Resolve aliases, apply defaults, assign the next id, validate and
    /// append. Nothing is stored when validation fails.
    fn add(&mut self, raw: RawInventoryInput) -> DomainResult<InventoryItem>;
    fn delete_by_id(&mut self, id: &str) -> Option<InventoryItem>;

    /// Every item with its read-time fields, as of `as_of`.
    /// Stored items are not touched.
    fn with_derived(&self, as_of: NaiveDateTime) -> Vec<InventoryItemView> {
        self.list()
            .iter()
            .map(|item| derive_item(item, as_of))
            .collect()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    items: Vec<InventoryItem>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<InventoryItem>) -> Self {
        Self { items: seed }
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn list(&self) -> &[InventoryItem] {
        &self.items
    }

    fn find_by_id(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.inventory_id == id)
    }

    fn add(&mut self, raw: RawInventoryInput) -> DomainResult<InventoryItem> {
        let id = next_id(
            IdKind::Inventory,
            self.items.iter().map(|item| item.inventory_id.as_str()),
        );
        let item = InventoryItem::new(raw.into_candidate(id, &today_string()))?;

        self.items.push(item.clone());
        log::info!("Inventory item added: {}", item);

        Ok(item)
    }

    fn delete_by_id(&mut self, id: &str) -> Option<InventoryItem> {
        let index = self.items.iter().position(|item| item.inventory_id == id)?;
        let removed = self.items.remove(index);
        log::info!("Inventory item deleted: {}", removed);
        Some(removed)
    }
}
