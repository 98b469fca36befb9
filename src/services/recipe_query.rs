// src/services/recipe_query.rs
//
// Recipe Query Engine
//
// CRITICAL RULES:
// - Pure functions over a recipe slice
// - Never mutate recipes; results borrow from the input or are new values
// - Relative order of the input is preserved

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::Recipe;

/// Selector value that matches anything
pub const WILDCARD: &str = "all";

pub const MIN_SCALE: f64 = 0.25;
pub const MAX_SCALE: f64 = 5.0;

/// Leading quantity of an ingredient line: "200g flour" -> ("200", "g flour")
static LEADING_QUANTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)(.*)$").unwrap());

// ============================================================================
// ATTRIBUTE FILTER
// ============================================================================

/// One attribute filter: a concrete value or the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Value(String),
}

impl Serialize for Selector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Selector::All => serializer.serialize_str(WILDCARD),
            Selector::Value(value) => serializer.serialize_str(value),
        }
    }
}

impl Selector {
    /// Absent, blank and "all" (any case) are the wildcard
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Selector::All,
            Some(value) if value.eq_ignore_ascii_case(WILDCARD) => Selector::All,
            Some(value) => Selector::Value(value.to_string()),
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Value(value) => value.to_lowercase() == candidate.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilter {
    pub meal_type: Selector,
    pub cuisine_type: Selector,
    pub difficulty: Selector,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.meal_type.matches(&recipe.meal_type)
            && self.cuisine_type.matches(&recipe.cuisine_type)
            && self.difficulty.matches(recipe.difficulty.as_str())
    }
}

/// Recipes matching every non-wildcard selector
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

// ============================================================================
// FREE-TEXT SEARCH
// ============================================================================

fn recipe_contains(recipe: &Recipe, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);

    hit(recipe.title.as_str())
        || hit(recipe.chef.as_str())
        || hit(recipe.meal_type.as_str())
        || hit(recipe.cuisine_type.as_str())
        || recipe.ingredients.iter().any(|line| hit(line.as_str()))
        || recipe.instructions.iter().any(|line| hit(line.as_str()))
}

/// Recipes containing `query` (case-insensitive) in title, chef, meal type,
/// cuisine type, or any single ingredient or instruction line.
/// An empty query matches everything.
pub fn search_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    recipes
        .iter()
        .filter(|r| needle.is_empty() || recipe_contains(r, &needle))
        .collect()
}

/// Whether a search was requested at all, and what it found.
/// "Not searched" is distinct from searching for "".
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState<'a> {
    NotSearched,
    Searched {
        query: String,
        results: Vec<&'a Recipe>,
    },
}

impl<'a> SearchState<'a> {
    /// A search counts as requested when either `query` or `scale` was
    /// supplied, even empty
    pub fn run(recipes: &'a [Recipe], query: Option<&str>, scale: Option<&str>) -> Self {
        if query.is_none() && scale.is_none() {
            return SearchState::NotSearched;
        }
        let query = query.unwrap_or_default().trim().to_string();
        let results = search_recipes(recipes, &query);
        SearchState::Searched { query, results }
    }

    pub fn is_searched(&self) -> bool {
        matches!(self, SearchState::Searched { .. })
    }

    pub fn results(&self) -> &[&'a Recipe] {
        match self {
            SearchState::NotSearched => &[],
            SearchState::Searched { results, .. } => results,
        }
    }
}

// ============================================================================
// INGREDIENT SCALING
// ============================================================================

/// Clamp into [MIN_SCALE, MAX_SCALE]; non-finite factors become 1
pub fn clamp_scale(factor: f64) -> f64 {
    if !factor.is_finite() {
        return 1.0;
    }
    factor.clamp(MIN_SCALE, MAX_SCALE)
}

/// Parse a submitted factor; absent or unparseable means 1
pub fn parse_scale(raw: Option<&str>) -> f64 {
    let factor = raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(1.0);
    clamp_scale(factor)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Multiply the leading quantity of an ingredient line.
/// Lines without a leading number are returned unchanged, and so are
/// fractions like "1/2 cup".
pub fn scale_line(line: &str, factor: f64) -> String {
    let factor = clamp_scale(factor);
    let Some(caps) = LEADING_QUANTITY.captures(line) else {
        return line.to_string();
    };
    if caps[2].starts_with('/') {
        return line.to_string();
    }
    let Ok(amount) = caps[1].parse::<f64>() else {
        return line.to_string();
    };
    format!("{}{}", round2(amount * factor), &caps[2])
}

/// max(1, round(servings × factor))
pub fn scale_servings(servings: f64, factor: f64) -> u64 {
    let scaled = (servings * clamp_scale(factor)).round();
    if scaled.is_finite() && scaled >= 1.0 {
        scaled as u64
    } else {
        1
    }
}

/// A recipe's ingredient list recomputed for a different yield
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredients {
    pub scale: f64,
    pub scaled_servings: u64,
    pub ingredients: Vec<String>,
}

pub fn scale_recipe(recipe: &Recipe, factor: f64) -> ScaledIngredients {
    let scale = clamp_scale(factor);
    ScaledIngredients {
        scale,
        scaled_servings: scale_servings(recipe.servings, scale),
        ingredients: recipe
            .ingredients
            .iter()
            .map(|line| scale_line(line, scale))
            .collect(),
    }
}
