use super::entity::InventoryItem;
use crate::domain::dates::parse_date;
use crate::domain::identifiers::IdKind;
use crate::domain::{DomainError, DomainResult};

/// Validates all InventoryItem invariants, stopping at the first violation
pub fn validate_inventory_item(item: &InventoryItem) -> DomainResult<()> {
    validate_inventory_id(&item.inventory_id)?;
    validate_required("userId", &item.user_id)?;
    validate_required("ingredientName", &item.ingredient_name)?;
    validate_required("unit", &item.unit)?;
    validate_required("category", &item.category)?;
    validate_required("location", &item.location)?;
    validate_non_negative("quantity", item.quantity)?;
    validate_non_negative("cost", item.cost)?;
    validate_optional_date("purchaseDate", item.purchase_date.as_deref())?;
    validate_optional_date("expirationDate", item.expiration_date.as_deref())?;
    validate_optional_date("createdDate", Some(&item.created_date))?;
    validate_expiration_after_purchase(item)?;
    Ok(())
}

fn validate_inventory_id(id: &str) -> DomainResult<()> {
    if !IdKind::Inventory.matches(id) {
        return Err(DomainError::validation(
            "inventoryId",
            format!("inventoryId must match I-00000 format, got {:?}", id),
        ));
    }
    Ok(())
}

fn validate_required(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(
            field,
            format!("{} must be a non-empty string", field),
        ));
    }
    Ok(())
}

/// Finite and >= 0
fn validate_non_negative(field: &'static str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(
            field,
            format!("{} must be a non-negative number", field),
        ));
    }
    Ok(())
}

fn validate_optional_date(field: &'static str, value: Option<&str>) -> DomainResult<()> {
    if let Some(value) = value {
        if parse_date(value).is_none() {
            return Err(DomainError::validation(
                field,
                format!("{} must be a YYYY-MM-DD date", field),
            ));
        }
    }
    Ok(())
}

/// If both dates are present, expiration must be on or after purchase
fn validate_expiration_after_purchase(item: &InventoryItem) -> DomainResult<()> {
    let purchase = item.purchase_date.as_deref().and_then(parse_date);
    let expiration = item.expiration_date.as_deref().and_then(parse_date);

    if let (Some(purchase), Some(expiration)) = (purchase, expiration) {
        if expiration < purchase {
            return Err(DomainError::validation(
                "expirationDate",
                format!(
                    "expirationDate {} cannot be before purchaseDate {}",
                    expiration, purchase
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::InventoryCandidate;

    fn candidate() -> InventoryCandidate {
        InventoryCandidate {
            inventory_id: "I-00003".to_string(),
            user_id: "demo-user".to_string(),
            ingredient_name: "Milk".to_string(),
            quantity: 2.0,
            unit: "liters".to_string(),
            category: "Dairy".to_string(),
            location: "Fridge".to_string(),
            cost: 1.2,
            purchase_date: Some("2024-05-01".to_string()),
            expiration_date: Some("2024-05-08".to_string()),
            created_date: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn test_valid_item() {
        assert!(InventoryItem::new(candidate()).is_ok());
    }

    #[test]
    fn test_expiration_before_purchase_fails() {
        let mut c = candidate();
        c.expiration_date = Some("2024-04-30".to_string());
        let err = InventoryItem::new(c).unwrap_err();
        assert_eq!(err.field(), "expirationDate");
        assert!(err.to_string().contains("before purchaseDate"));
    }

    #[test]
    fn test_expiration_equal_to_purchase_is_valid() {
        let mut c = candidate();
        c.expiration_date = c.purchase_date.clone();
        assert!(InventoryItem::new(c).is_ok());
    }

    #[test]
    fn test_dates_are_optional() {
        let mut c = candidate();
        c.purchase_date = None;
        c.expiration_date = None;
        assert!(InventoryItem::new(c).is_ok());
    }

    #[test]
    fn test_quantity_zero_allowed_negative_rejected() {
        let mut c = candidate();
        c.quantity = 0.0;
        assert!(InventoryItem::new(c.clone()).is_ok());

        c.quantity = -0.5;
        assert_eq!(InventoryItem::new(c).unwrap_err().field(), "quantity");
    }

    #[test]
    fn test_field_order_is_respected() {
        let mut c = candidate();
        c.unit = String::new();
        c.quantity = f64::NAN;
        c.purchase_date = Some("yesterday".to_string());
        assert_eq!(InventoryItem::new(c).unwrap_err().field(), "unit");

        let mut c = candidate();
        c.cost = f64::INFINITY;
        c.expiration_date = Some("2024/05/08".to_string());
        assert_eq!(InventoryItem::new(c).unwrap_err().field(), "cost");
    }

    #[test]
    fn test_bad_date_format_fails_before_cross_field() {
        let mut c = candidate();
        c.expiration_date = Some("2024-13-01".to_string());
        assert_eq!(InventoryItem::new(c).unwrap_err().field(), "expirationDate");

        let mut c = candidate();
        c.created_date = "today".to_string();
        assert_eq!(InventoryItem::new(c).unwrap_err().field(), "createdDate");
    }
}
