// src/repositories/recipe_repository.rs
//
// Recipe storage - in-memory, insertion ordered

use crate::domain::dates::today_string;
use crate::domain::identifiers::{next_id, IdKind};
use crate::domain::{DomainResult, Recipe};
use crate::repositories::raw_input::RawRecipeInput;

pub trait RecipeRepository: Send + Sync {
    /// All recipes in insertion order
    fn list(&self) -> &[Recipe];
    fn find_by_id(&self, id: &str) -> Option<&Recipe>;
    /// Normalize, assign the next id, validate and append.
    /// Nothing is stored when validation fails.
    fn add(&mut self, raw: RawRecipeInput) -> DomainResult<Recipe>;
    /// Remove and return the first recipe with `id`
    fn delete_by_id(&mut self, id: &str) -> Option<Recipe>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Vec<Recipe>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed initial set, kept in the given order
    pub fn with_seed(seed: Vec<Recipe>) -> Self {
        Self { recipes: seed }
    }

    fn next_recipe_id(&self) -> String {
        next_id(
            IdKind::Recipe,
            self.recipes.iter().map(|r| r.recipe_id.as_str()),
        )
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    fn find_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.recipe_id == id)
    }

    fn add(&mut self, raw: RawRecipeInput) -> DomainResult<Recipe> {
        // Caller-supplied createdDate is ignored
        let candidate = raw.into_candidate(self.next_recipe_id(), today_string());
        let recipe = Recipe::new(candidate)?;

        self.recipes.push(recipe.clone());
        log::info!("Recipe added: {}", recipe);

        Ok(recipe)
    }

    fn delete_by_id(&mut self, id: &str) -> Option<Recipe> {
        let index = self.recipes.iter().position(|r| r.recipe_id == id)?;
        let removed = self.recipes.remove(index);
        log::info!("Recipe deleted: {}", removed);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use crate::repositories::raw_input::FieldValue;
    use crate::repositories::seed::seed_recipes;

    fn payload() -> RawRecipeInput {
        RawRecipeInput {
            title: Some("Tomato Soup".into()),
            chef: Some("Lena".into()),
            ingredients: Some("6 tomatoes\n1 onion, 500ml stock".into()),
            instructions: Some("Chop\nSimmer\nBlend".into()),
            meal_type: Some("Lunch".into()),
            cuisine_type: Some("French".into()),
            prep_time: Some("35".into()),
            difficulty: Some("Easy".into()),
            servings: Some("4".into()),
            created_date: Some("1999-01-01".into()),
        }
    }

    #[test]
    fn test_first_add_on_empty_store() {
        let mut repo = InMemoryRecipeRepository::new();
        let recipe = repo.add(payload()).unwrap();
        assert_eq!(recipe.recipe_id, "R-00001");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_add_normalizes_and_stamps_date() {
        let mut repo = InMemoryRecipeRepository::with_seed(seed_recipes());
        let recipe = repo.add(payload()).unwrap();

        assert_eq!(recipe.recipe_id, "R-00003");
        assert_eq!(recipe.ingredients, vec!["6 tomatoes", "1 onion", "500ml stock"]);
        assert_eq!(recipe.instructions.len(), 3);
        assert_eq!(recipe.prep_time, 35.0);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.created_date, today_string());
        assert_eq!(repo.find_by_id("R-00003"), Some(&recipe));
    }

    #[test]
    fn test_next_id_follows_highest_remaining() {
        let mut repo = InMemoryRecipeRepository::with_seed(seed_recipes());
        let third = repo.add(payload()).unwrap();
        repo.delete_by_id("R-00002").unwrap();

        let fourth = repo.add(payload()).unwrap();
        assert_eq!(third.recipe_id, "R-00003");
        assert_eq!(fourth.recipe_id, "R-00004");

        // A gap is never refilled, but deleting the highest id frees its number
        repo.delete_by_id("R-00004").unwrap();
        assert_eq!(repo.add(payload()).unwrap().recipe_id, "R-00004");
    }

    #[test]
    fn test_missing_title_leaves_store_untouched() {
        let mut repo = InMemoryRecipeRepository::with_seed(seed_recipes());
        let before = repo.list().to_vec();

        let mut raw = payload();
        raw.title = None;
        let err = repo.add(raw).unwrap_err();

        assert_eq!(err.field(), "title");
        assert_eq!(repo.list(), before.as_slice());
    }

    #[test]
    fn test_non_numeric_servings_rejected() {
        let mut repo = InMemoryRecipeRepository::new();
        let mut raw = payload();
        raw.servings = Some(FieldValue::from("a few"));
        assert_eq!(repo.add(raw).unwrap_err().field(), "servings");
        assert!(repo.is_empty());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let repo = InMemoryRecipeRepository::with_seed(seed_recipes());
        assert_eq!(repo.list(), repo.list());
        assert_eq!(repo.find_by_id("R-00001"), repo.find_by_id("R-00001"));
        assert!(repo.find_by_id("R-00099").is_none());
    }

    #[test]
    fn test_delete_round_trip() {
        let mut repo = InMemoryRecipeRepository::with_seed(seed_recipes());
        let before = repo.len();

        let added = repo.add(payload()).unwrap();
        let removed = repo.delete_by_id(&added.recipe_id).unwrap();

        assert_eq!(removed, added);
        assert_eq!(repo.len(), before);
    }

    #[test]
    fn test_delete_missing_is_none() {
        let mut repo = InMemoryRecipeRepository::with_seed(seed_recipes());
        assert!(repo.delete_by_id("R-00042").is_none());
        assert_eq!(repo.len(), 2);
    }
}
