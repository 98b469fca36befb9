// src/application/commands/recipe_commands.rs
//
// Recipe Command Handlers
//
// RULES:
// - Accept raw forms and query parameters
// - Run request-shape checks, then call the repository
// - Return page DTOs
// - Never contain business logic

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};

use crate::application::dto::*;
use crate::application::request_validation::check_recipe_form;
use crate::application::state::AppState;
use crate::domain::Recipe;
use crate::error::{AppError, AppResult};
use crate::repositories::RawRecipeInput;
use crate::services::{
    filter_recipes, parse_scale, scale_recipe, RecipeFilter, SearchState, Selector,
};

/// List recipes, optionally filtered by meal type, cuisine and difficulty
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> Json<RecipeListPage> {
    let filters = RecipeFilter {
        meal_type: Selector::parse(params.meal_type.as_deref()),
        cuisine_type: Selector::parse(params.cuisine_type.as_deref()),
        difficulty: Selector::parse(params.difficulty.as_deref()),
    };

    let repo = state.recipes.read().await;
    let recipes: Vec<_> = filter_recipes(repo.list(), &filters)
        .into_iter()
        .cloned()
        .collect();

    Json(RecipeListPage {
        total: recipes.len(),
        recipes,
        filters,
        flash: params.flash_params().into_message("Recipe"),
    })
}

/// Get a single recipe by ID
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> AppResult<Json<Recipe>> {
    let repo = state.recipes.read().await;
    repo.find_by_id(&recipe_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound("Recipe"))
}

/// Create a new recipe from the add form
pub async fn create_recipe(
    State(state): State<AppState>,
    Form(raw): Form<RawRecipeInput>,
) -> AppResult<Response> {
    if let Err(e) = check_recipe_form(&raw) {
        log::debug!("Recipe form rejected: {}", e);
        return Err(e);
    }

    let recipe = state.recipes.write().await.add(raw).map_err(|e| {
        log::debug!("Recipe rejected by validation: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(recipe)).into_response())
}

/// Free-text search with an ingredient scaling preview
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchPage> {
    let scale = parse_scale(params.scale.as_deref());

    let repo = state.recipes.read().await;
    let search = SearchState::run(repo.list(), params.query.as_deref(), params.scale.as_deref());

    let page = match search {
        SearchState::NotSearched => SearchPage {
            searched: false,
            query: None,
            scale,
            results: Vec::new(),
        },
        SearchState::Searched { query, results } => SearchPage {
            searched: true,
            query: Some(query),
            scale,
            results: results
                .into_iter()
                .map(|recipe| SearchHit::new(recipe, scale_recipe(recipe, scale)))
                .collect(),
        },
    };

    Json(page)
}

/// Delete a recipe, then send the visitor back to the list with a flash
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Redirect {
    let removed = state.recipes.write().await.delete_by_id(&recipe_id);

    match removed {
        Some(recipe) => Redirect::to(&format!("/recipes?flash=deleted&id={}", recipe.recipe_id)),
        None => {
            log::warn!("Delete requested for unknown recipe {:?}", recipe_id);
            Redirect::to("/recipes?flash=not_found")
        }
    }
}
