//! The recipe pipelines: build prompts → call the gateway → normalize.
//! Each request is one linear pass; nothing is retried.

use tracing::{info, instrument};

use crate::errors::AppError;
use crate::llm_client::{CompletionGateway, CompletionRequest, InlineImage, Turn};
use crate::recipes::models::{
    DetectedIngredient, DishChatRequest, DishChatResponse, PantryRequest, PreferenceRequest,
    RecipesResponse,
};
use crate::recipes::normalize::{normalize_ingredients, parse_dish_reply, parse_recipes};
use crate::recipes::prompts::{
    build_dish_chat_system_prompt, build_pantry_user_prompt, build_preference_user_prompt,
    recent_history, sanji_system_prompt, VISION_SYSTEM, VISION_USER,
};

#[instrument(skip_all, fields(ingredients = req.ingredients.len()))]
pub async fn recipes_from_pantry(
    gateway: &dyn CompletionGateway,
    req: &PantryRequest,
) -> Result<RecipesResponse, AppError> {
    let request = CompletionRequest::new(sanji_system_prompt(), build_pantry_user_prompt(req));
    let raw = gateway.complete(request).await?;
    let response = parse_recipes(&raw)?;
    info!(recipes = response.recipes.len(), "Pantry recipes generated");
    Ok(response)
}

#[instrument(skip_all)]
pub async fn recipes_from_preferences(
    gateway: &dyn CompletionGateway,
    req: &PreferenceRequest,
) -> Result<RecipesResponse, AppError> {
    let request =
        CompletionRequest::new(sanji_system_prompt(), build_preference_user_prompt(req));
    let raw = gateway.complete(request).await?;
    let response = parse_recipes(&raw)?;
    info!(recipes = response.recipes.len(), "Preference recipes generated");
    Ok(response)
}

#[instrument(skip_all, fields(content_type = %image.content_type, bytes = image.data.len()))]
pub async fn ingredients_from_image(
    gateway: &dyn CompletionGateway,
    image: InlineImage,
) -> Result<Vec<DetectedIngredient>, AppError> {
    let request = CompletionRequest::new(VISION_SYSTEM, VISION_USER).with_image(image);
    let raw = gateway.complete(request).await?;
    let ingredients = normalize_ingredients(&raw)?;
    info!(detected = ingredients.len(), "Ingredients detected from image");
    Ok(ingredients)
}

#[instrument(skip_all, fields(dish = %req.recipe.name, turns = req.messages.len()))]
pub async fn chat_about_dish(
    gateway: &dyn CompletionGateway,
    req: &DishChatRequest,
) -> Result<DishChatResponse, AppError> {
    let history: Vec<Turn> = recent_history(&req.messages)
        .iter()
        .map(Turn::from)
        .collect();
    let request = CompletionRequest::new(
        build_dish_chat_system_prompt(&req.recipe),
        req.question.trim(),
    )
    .with_history(history);
    let raw = gateway.complete(request).await?;
    Ok(parse_dish_reply(&raw)?)
}
