use super::entity::{Difficulty, Recipe, RecipeCandidate};
use crate::domain::dates::parse_date;
use crate::domain::identifiers::IdKind;
use crate::domain::{DomainError, DomainResult};

/// Validates all Recipe invariants
/// These are the absolute rules that must hold for a Recipe to be valid
pub fn validate_recipe(recipe: &Recipe) -> DomainResult<()> {
    validate_recipe_id(&recipe.recipe_id)?;
    validate_required("title", &recipe.title)?;
    validate_required("chef", &recipe.chef)?;
    validate_positive("prepTime", recipe.prep_time)?;
    validate_positive("servings", recipe.servings)?;
    validate_created_date(&recipe.created_date)?;
    Ok(())
}

/// Same checks as `validate_recipe`, in field order, for fields that have
/// not been typed yet. Returns the parsed difficulty.
pub(super) fn check_candidate(candidate: &RecipeCandidate) -> DomainResult<Difficulty> {
    validate_recipe_id(&candidate.recipe_id)?;
    validate_required("title", &candidate.title)?;
    validate_required("chef", &candidate.chef)?;
    validate_positive("prepTime", candidate.prep_time)?;
    let difficulty = candidate.difficulty.parse::<Difficulty>()?;
    validate_positive("servings", candidate.servings)?;
    validate_created_date(&candidate.created_date)?;
    Ok(difficulty)
}

fn validate_recipe_id(id: &str) -> DomainResult<()> {
    if !IdKind::Recipe.matches(id) {
        return Err(DomainError::validation(
            "recipeId",
            format!("recipeId must match R-00000 format, got {:?}", id),
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

/// Finite and strictly greater than zero
fn validate_positive(field: &'static str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation(
            field,
            format!("{} must be a positive number", field),
        ));
    }
    Ok(())
}

fn validate_created_date(value: &str) -> DomainResult<()> {
    if parse_date(value).is_none() {
        return Err(DomainError::validation(
            "createdDate",
            "createdDate must be a YYYY-MM-DD date",
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Recipe domain:
///
/// 1. recipeId matches R-\d{5} and is unique for the process lifetime
/// 2. recipeId is assigned by the repository and never reused
/// 3. title and chef are non-empty after trimming
/// 4. prepTime and servings are finite and > 0
/// 5. difficulty is exactly Easy, Medium or Hard
/// 6. ingredients and instructions may be empty
/// 7. createdDate is YYYY-MM-DD
