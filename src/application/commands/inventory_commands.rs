// src/application/commands/inventory_commands.rs
//
// Inventory Command Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use chrono::Local;

use crate::application::dto::*;
use crate::application::request_validation::check_inventory_form;
use crate::application::state::AppState;
use crate::domain::{derive_item, InventoryItemView};
use crate::error::{AppError, AppResult};
use crate::repositories::RawInventoryInput;

/// List inventory with expiry countdown and line values as of now
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(flash): Query<FlashParams>,
) -> Json<InventoryListPage> {
    let items = state
        .inventory
        .read()
        .await
        .with_derived(Local::now().naive_local());

    Json(InventoryListPage::new(items, flash.into_message("Inventory item")))
}

pub async fn get_inventory_item(
    State(state): State<AppState>,
    Path(inventory_id): Path<String>,
) -> AppResult<Json<InventoryItemView>> {
    let repo = state.inventory.read().await;
    repo.find_by_id(&inventory_id)
        .map(|item| Json(derive_item(item, Local::now().naive_local())))
        .ok_or(AppError::NotFound("Inventory item"))
}

/// Create a new inventory item from the add form
pub async fn create_inventory_item(
    State(state): State<AppState>,
    Form(raw): Form<RawInventoryInput>,
) -> AppResult<Response> {
    if let Err(e) = check_inventory_form(&raw) {
        log::debug!("Inventory form rejected: {}", e);
        return Err(e);
    }

    let item = state.inventory.write().await.add(raw).map_err(|e| {
        log::debug!("Inventory item rejected by validation: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

pub async fn delete_inventory_item(
    State(state): State<AppState>,
    Path(inventory_id): Path<String>,
) -> Redirect {
    let removed = state.inventory.write().await.delete_by_id(&inventory_id);

    match removed {
        Some(item) => Redirect::to(&format!("/inventory?flash=deleted&id={}", item.inventory_id)),
        None => {
            log::warn!("Delete requested for unknown inventory item {:?}", inventory_id);
            Redirect::to("/inventory?flash=not_found")
        }
    }
}
