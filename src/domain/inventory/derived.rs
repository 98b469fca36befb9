use chrono::NaiveDateTime;
use serde::Serialize;

use super::entity::InventoryItem;
use crate::domain::dates::parse_date;

/// An inventory item together with its read-time fields.
/// Derived fields are NEVER stored and are recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemView {
    #[serde(flatten)]
    pub item: InventoryItem,

    /// Whole days until expiration; negative once expired, None without a date
    pub days_left: Option<i64>,

    /// quantity × cost
    pub line_value: f64,
}

impl InventoryItemView {
    pub fn is_expired(&self) -> bool {
        matches!(self.days_left, Some(days) if days < 0)
    }
}

/// Project one item as of `as_of`.
/// `as_of` is truncated to midnight so the count ignores time of day.
pub fn derive_item(item: &InventoryItem, as_of: NaiveDateTime) -> InventoryItemView {
    let as_of_day = as_of.date();
    let days_left = item
        .expiration_date
        .as_deref()
        .and_then(parse_date)
        .map(|expiration| (expiration - as_of_day).num_days());

    InventoryItemView {
        item: item.clone(),
        days_left,
        line_value: item.line_value(),
    }
}
