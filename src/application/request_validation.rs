// src/application/request_validation.rs
//
// Request-shape checks on submitted forms
//
// RULES:
// - Runs BEFORE the repository is called
// - Looks only at presence and shape of raw fields
// - Collects every issue, not just the first
// - Strict entity rules (ids, calendar dates, cross-field) stay in the domain

use crate::domain::dates::has_date_shape;
use crate::domain::Difficulty;
use crate::error::{AppError, AppResult, FieldIssue};
use crate::repositories::raw_input::{present, FieldValue, RawInventoryInput, RawRecipeInput};

fn require_text(
    issues: &mut Vec<FieldIssue>,
    field: &'static str,
    value: Option<&FieldValue>,
    message: &str,
) {
    if value.is_none() {
        issues.push(FieldIssue::new(field, message));
    }
}

fn require_number(
    issues: &mut Vec<FieldIssue>,
    field: &'static str,
    value: Option<&FieldValue>,
    min_exclusive: bool,
    message: &str,
) {
    let ok = value.map(FieldValue::number).is_some_and(|n| {
        n.is_finite() && if min_exclusive { n > 0.0 } else { n >= 0.0 }
    });
    if !ok {
        issues.push(FieldIssue::new(field, message));
    }
}

fn date_shape(
    issues: &mut Vec<FieldIssue>,
    field: &'static str,
    value: Option<&FieldValue>,
    message: &str,
) {
    if let Some(value) = value {
        if !has_date_shape(&value.text()) {
            issues.push(FieldIssue::new(field, message));
        }
    }
}

fn finish(issues: Vec<FieldIssue>) -> AppResult<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::RequestRejected(issues))
    }
}

/// Shape checks for the add-recipe form
pub fn check_recipe_form(raw: &RawRecipeInput) -> AppResult<()> {
    let mut issues = Vec::new();

    require_text(&mut issues, "title", present(&raw.title), "Title is required.");
    require_text(&mut issues, "chef", present(&raw.chef), "Chef is required.");
    require_text(
        &mut issues,
        "ingredients",
        present(&raw.ingredients),
        "Ingredients are required.",
    );
    require_text(
        &mut issues,
        "instructions",
        present(&raw.instructions),
        "Instructions are required.",
    );

    let difficulty_ok = present(&raw.difficulty)
        .map(FieldValue::text)
        .is_some_and(|d| d.parse::<Difficulty>().is_ok());
    if !difficulty_ok {
        issues.push(FieldIssue::new(
            "difficulty",
            "Difficulty must be Easy, Medium or Hard.",
        ));
    }

    require_number(
        &mut issues,
        "prepTime",
        present(&raw.prep_time),
        true,
        "Prep time must be a number greater than 0.",
    );
    require_number(
        &mut issues,
        "servings",
        present(&raw.servings),
        true,
        "Servings must be a number greater than 0.",
    );

    finish(issues)
}

/// Shape checks for the add-inventory form. Aliases are honoured.
pub fn check_inventory_form(raw: &RawInventoryInput) -> AppResult<()> {
    let mut issues = Vec::new();

    require_text(
        &mut issues,
        "ingredientName",
        raw.resolved_name(),
        "Ingredient name is required.",
    );
    require_number(
        &mut issues,
        "quantity",
        present(&raw.quantity),
        false,
        "Quantity must be a number of 0 or more.",
    );
    require_text(&mut issues, "unit", present(&raw.unit), "Unit is required.");
    require_text(&mut issues, "category", present(&raw.category), "Category is required.");

    if let Some(cost) = raw.resolved_cost() {
        require_number(
            &mut issues,
            "cost",
            Some(cost),
            false,
            "Cost must be a number of 0 or more.",
        );
    }

    date_shape(
        &mut issues,
        "purchaseDate",
        present(&raw.purchase_date),
        "Purchase date must look like YYYY-MM-DD.",
    );
    date_shape(
        &mut issues,
        "expirationDate",
        raw.resolved_expiration(),
        "Expiration date must look like YYYY-MM-DD.",
    );

    finish(issues)
}
