use serde::Serialize;
use std::str::FromStr;

use super::invariants;
use crate::domain::{DomainError, DomainResult};

/// A recipe in the recipe box
/// Identity is assigned by the repository and never changes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// `R-` followed by five digits
    pub recipe_id: String,

    pub title: String,

    pub chef: String,

    /// One free-text line per ingredient ("200g flour")
    pub ingredients: Vec<String>,

    /// One free-text line per step
    pub instructions: Vec<String>,

    /// Free text, e.g. "Dinner"
    pub meal_type: String,

    /// Free text, e.g. "Italian"
    pub cuisine_type: String,

    /// Minutes
    pub prep_time: f64,

    pub difficulty: Difficulty,

    pub servings: f64,

    /// `YYYY-MM-DD`
    pub created_date: String,
}

/// How hard a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    /// Only the exact literals are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            _ => Err(DomainError::validation(
                "difficulty",
                "difficulty must be one of Easy, Medium, Hard",
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unvalidated recipe fields, already coerced to native types.
/// `difficulty` is still the submitted literal.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCandidate {
    pub recipe_id: String,
    pub title: String,
    pub chef: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub meal_type: String,
    pub cuisine_type: String,
    pub prep_time: f64,
    pub difficulty: String,
    pub servings: f64,
    pub created_date: String,
}

impl Recipe {
    /// Build a Recipe from candidate fields.
    /// This is the only way to construct a valid Recipe; the first violated
    /// constraint is reported and nothing is built.
    pub fn new(candidate: RecipeCandidate) -> DomainResult<Self> {
        let difficulty = invariants::check_candidate(&candidate)?;

        Ok(Self {
            recipe_id: candidate.recipe_id,
            title: candidate.title,
            chef: candidate.chef,
            ingredients: candidate.ingredients,
            instructions: candidate.instructions,
            meal_type: candidate.meal_type,
            cuisine_type: candidate.cuisine_type,
            prep_time: candidate.prep_time,
            difficulty,
            servings: candidate.servings,
            created_date: candidate.created_date,
        })
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.recipe_id)
    }
}
