//! Turns raw model text into the typed response shapes.
//!
//! Recipe output is deserialized as-is: an out-of-set difficulty or mood is
//! a schema mismatch, never corrected. Ingredient lists from the photo flow
//! are looser and get coerced element by element.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::llm_client::strip_json_fences;
use crate::recipes::models::{DetectedIngredient, DishChatResponse, RecipesResponse};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("model output is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("model output does not match the expected schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

pub fn parse_recipes(raw: &str) -> Result<RecipesResponse, NormalizeError> {
    parse_typed(raw)
}

pub fn parse_dish_reply(raw: &str) -> Result<DishChatResponse, NormalizeError> {
    parse_typed(raw)
}

/// Accepts `{"ingredients": [...]}` or a bare array. Each element may be a
/// string or an object with a string `name`; anything else is dropped.
pub fn normalize_ingredients(raw: &str) -> Result<Vec<DetectedIngredient>, NormalizeError> {
    let value = parse_value(raw)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("ingredients") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    Ok(items.iter().filter_map(coerce_ingredient).collect())
}

fn coerce_ingredient(item: &Value) -> Option<DetectedIngredient> {
    let name = match item {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("name")?.as_str()?,
        _ => return None,
    };
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(DetectedIngredient {
        name: name.to_string(),
    })
}

fn parse_value(raw: &str) -> Result<Value, NormalizeError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(NormalizeError::MalformedJson)
}

fn parse_typed<T: DeserializeOwned>(raw: &str) -> Result<T, NormalizeError> {
    let value = parse_value(raw)?;
    serde_json::from_value(value).map_err(NormalizeError::SchemaMismatch)
}
