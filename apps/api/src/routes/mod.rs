pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::recipes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/recipe-from-pantry",
            post(handlers::handle_recipe_from_pantry),
        )
        .route(
            "/recipe-from-preferences",
            post(handlers::handle_recipe_from_preferences),
        )
        .route(
            "/ingredients-from-image",
            post(handlers::handle_ingredients_from_image),
        )
        .route("/dish-chat", post(handlers::handle_dish_chat))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
