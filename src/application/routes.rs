// src/application/routes.rs
//! Axum router configuration for the KitchenHub server

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::commands::*;
use crate::application::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Recipes
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/search", get(search_recipes))
        .route("/recipes/:id", get(get_recipe))
        .route("/recipes/:id/delete", post(delete_recipe))
        // Inventory
        .route("/inventory", get(list_inventory).post(create_inventory_item))
        .route("/inventory/:id", get(get_inventory_item))
        .route("/inventory/:id/delete", post(delete_inventory_item))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::seeded())
    }

    async fn send(app: Router, request: Request<Body>) -> Response {
        app.oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    const RECIPE_FORM: &str = "title=Shakshuka&chef=Noa&ingredients=6+eggs%0A400g+tomatoes&\
        instructions=Simmer+sauce%0APoach+eggs&mealType=Brunch&cuisineType=Middle+Eastern&\
        prepTime=30&difficulty=Easy&servings=3";

    #[tokio::test]
    async fn test_health_check() {
        let response = send(app(), get_request("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_recipes_with_filters() {
        let uri = "/recipes?mealType=all&cuisineType=all&difficulty=all";
        let response = send(app(), get_request(uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["recipes"][0]["recipeId"], "R-00001");
        assert_eq!(body["filters"]["mealType"], "all");

        let body = json_body(send(app(), get_request("/recipes?cuisineType=italian")).await).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["recipes"][0]["title"], "Classic Spaghetti Carbonara");
    }

    #[tokio::test]
    async fn test_create_recipe() {
        let state = AppState::seeded();
        let request = form_request("/recipes", RECIPE_FORM);
        let response = send(create_router(state.clone()), request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["recipeId"], "R-00003");
        assert_eq!(body["ingredients"][1], "400g tomatoes");
        assert_eq!(body["difficulty"], "Easy");
        assert_eq!(state.recipes.read().await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_recipe_rejects_bad_shape() {
        let state = AppState::seeded();
        let form = RECIPE_FORM.replace("title=Shakshuka", "title=");
        let response = send(create_router(state.clone()), form_request("/recipes", &form)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error_type"], "invalid_request");
        assert_eq!(body["issues"][0]["field"], "title");
        assert_eq!(state.recipes.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_get_recipe() {
        let response = send(app(), get_request("/recipes/R-00002")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["title"], "Avocado Toast");

        let response = send(app(), get_request("/recipes/R-00404")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error_type"], "not_found");
        assert_eq!(body["message"], "Recipe not found");
    }

    #[tokio::test]
    async fn test_search_not_performed_without_parameters() {
        let body = json_body(send(app(), get_request("/recipes/search")).await).await;
        assert_eq!(body["searched"], false);
        assert_eq!(body["results"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_empty_query_is_a_search() {
        let body = json_body(send(app(), get_request("/recipes/search?query=")).await).await;
        assert_eq!(body["searched"], true);
        assert_eq!(body["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_with_scaling() {
        let request = get_request("/recipes/search?query=carbonara&scale=0.5");
        let body = json_body(send(app(), request).await).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["title"], "Classic Spaghetti Carbonara");
        assert_eq!(results[0]["scaledServings"], 2);
        assert_eq!(results[0]["scaledIngredients"][0], "200g spaghetti");
        assert_eq!(results[0]["ingredients"][0], "400g spaghetti");

        let request = get_request("/recipes/search?query=sushi&scale=10");
        let body = json_body(send(app(), request).await).await;
        assert_eq!(body["scale"], 5.0);
        assert!(body["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_recipe_redirects_with_flash() {
        let state = AppState::seeded();

        let request = form_request("/recipes/R-00002/delete", "");
        let response = send(create_router(state.clone()), request).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/recipes?flash=deleted&id=R-00002");
        assert_eq!(state.recipes.read().await.len(), 1);

        let request = form_request("/recipes/R-00002/delete", "");
        let response = send(create_router(state.clone()), request).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/recipes?flash=not_found");

        let request = get_request("/recipes?flash=not_found");
        let body = json_body(send(create_router(state), request).await).await;
        assert_eq!(body["flash"]["message"], "Recipe not found");
    }

    #[tokio::test]
    async fn test_list_inventory_with_derived_fields() {
        let body = json_body(send(app(), get_request("/inventory")).await).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["items"][1]["ingredientName"], "Chicken Breast");
        assert_eq!(body["items"][1]["lineValue"], 51.2);
        assert!(body["items"][0]["daysLeft"].is_i64());
    }

    #[tokio::test]
    async fn test_create_inventory_item_with_aliases() {
        let state = AppState::seeded();
        let form = "name=Parmesan&quantity=1&unit=block&category=Dairy&pricePerUnit=7.5";
        let response = send(create_router(state.clone()), form_request("/inventory", form)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["inventoryId"], "I-00003");
        assert_eq!(body["ingredientName"], "Parmesan");
        assert_eq!(body["cost"], 7.5);
        assert_eq!(body["location"], "Unknown");
    }

    #[tokio::test]
    async fn test_inventory_domain_rejection_is_distinct() {
        let state = AppState::seeded();
        let form = "name=Milk&quantity=1&unit=l&category=Dairy&\
            purchaseDate=2024-05-10&expirationDate=2024-05-01";
        let response = send(create_router(state.clone()), form_request("/inventory", form)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error_type"], "validation");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("expirationDate 2024-05-01 cannot be before purchaseDate"));
        assert_eq!(state.inventory.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_inventory_item() {
        let state = AppState::seeded();
        let request = form_request("/inventory/I-00001/delete", "");
        let response = send(create_router(state.clone()), request).await;
        assert_eq!(location(&response), "/inventory?flash=deleted&id=I-00001");

        let response = send(create_router(state), get_request("/inventory/I-00001")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["message"], "Inventory item not found");
    }
}
