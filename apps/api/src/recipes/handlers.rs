//! Axum route handlers for the kitchen API.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    Json,
};

use crate::errors::AppError;
use crate::recipes::generator::{
    chat_about_dish, ingredients_from_image, recipes_from_pantry, recipes_from_preferences,
};
use crate::recipes::image::read_image_upload;
use crate::recipes::models::{
    DishChatRequest, DishChatResponse, IngredientsResponse, PantryRequest, PreferenceRequest,
    RecipesResponse,
};
use crate::state::AppState;

/// POST /recipe-from-pantry
pub async fn handle_recipe_from_pantry(
    State(state): State<AppState>,
    payload: Result<Json<PantryRequest>, JsonRejection>,
) -> Result<Json<RecipesResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let response = recipes_from_pantry(state.gateway.as_ref(), &request).await?;
    Ok(Json(response))
}

/// POST /recipe-from-preferences
pub async fn handle_recipe_from_preferences(
    State(state): State<AppState>,
    payload: Result<Json<PreferenceRequest>, JsonRejection>,
) -> Result<Json<RecipesResponse>, AppError> {
    let Json(request) = payload?;

    let response = recipes_from_preferences(state.gateway.as_ref(), &request).await?;
    Ok(Json(response))
}

/// POST /ingredients-from-image
///
/// Multipart upload with the photo in the `file` field.
pub async fn handle_ingredients_from_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<IngredientsResponse>, AppError> {
    let image = read_image_upload(multipart?).await?;

    let ingredients = ingredients_from_image(state.gateway.as_ref(), image).await?;
    Ok(Json(IngredientsResponse { ingredients }))
}

/// POST /dish-chat
pub async fn handle_dish_chat(
    State(state): State<AppState>,
    payload: Result<Json<DishChatRequest>, JsonRejection>,
) -> Result<Json<DishChatResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let response = chat_about_dish(state.gateway.as_ref(), &request).await?;
    Ok(Json(response))
}
