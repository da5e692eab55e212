use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{Role, Turn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SanjiMood {
    Happy,
    Annoyed,
    Flirty,
    Serious,
}

// ────────────────────────────────────────────────────────────────────────────
// Inbound requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryRequest {
    pub ingredients: Vec<String>,
    pub difficulty: Option<String>,
    pub time_limit_minutes: Option<u32>,
    pub mood: Option<String>,
    pub sanji_mode: Option<String>,
}

impl PantryRequest {
    /// Rejects an empty ingredient list or blank ingredient names.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.ingredients.is_empty() {
            return Err(AppError::Validation(
                "ingredients must contain at least one item".to_string(),
            ));
        }
        if let Some(pos) = self.ingredients.iter().position(|i| i.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "ingredients[{pos}] cannot be blank"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    pub dish_type: Option<String>,
    pub difficulty: Option<String>,
    pub time_limit_minutes: Option<u32>,
    pub budget: Option<String>,
    pub reason: Option<String>,
    pub diet: Option<String>,
    pub sanji_mode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatMessage> for Turn {
    fn from(message: &ChatMessage) -> Self {
        Turn {
            role: match message.role {
                ChatRole::User => Role::User,
                ChatRole::Assistant => Role::Assistant,
            },
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DishChatRequest {
    pub recipe: Recipe,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub question: String,
}

impl DishChatRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.question.trim().is_empty() {
            return Err(AppError::Validation("question cannot be empty".to_string()));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Responses (also the schema the model output must match)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub estimated_time_minutes: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub sanji_comment: String,
    pub sanji_mood: SanjiMood,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectedIngredient {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientsResponse {
    pub ingredients: Vec<DetectedIngredient>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishChatResponse {
    pub reply: String,
    pub sanji_mood: SanjiMood,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pantry_request_camel_case_fields() {
        let req: PantryRequest = serde_json::from_value(json!({
            "ingredients": ["egg"],
            "timeLimitMinutes": 15,
            "sanjiMode": "flirty"
        }))
        .unwrap();
        assert_eq!(req.time_limit_minutes, Some(15));
        assert_eq!(req.sanji_mode.as_deref(), Some("flirty"));
        assert!(req.difficulty.is_none());
    }

    #[test]
    fn test_pantry_request_requires_ingredients_field() {
        let result = serde_json::from_value::<PantryRequest>(json!({"difficulty": "easy"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_pantry_validate_rejects_empty_and_blank() {
        let empty = PantryRequest::default();
        assert!(matches!(empty.validate(), Err(AppError::Validation(_))));

        let blank = PantryRequest {
            ingredients: vec!["egg".to_string(), "  ".to_string()],
            ..Default::default()
        };
        match blank.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("ingredients[1]")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_preference_request_accepts_empty_object() {
        let req: PreferenceRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.dish_type.is_none());
        assert!(req.time_limit_minutes.is_none());
    }

    #[test]
    fn test_recipe_rejects_unknown_mood() {
        let result = serde_json::from_value::<Recipe>(json!({
            "name": "Omurice",
            "estimatedTimeMinutes": 20,
            "difficulty": "easy",
            "ingredients": [{"name": "egg", "amount": "2"}],
            "steps": ["Cook."],
            "sanjiComment": "Hmph.",
            "sanjiMood": "sleepy"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_ingredient_amount_is_optional() {
        let ingredient: Ingredient = serde_json::from_value(json!({"name": "salt"})).unwrap();
        assert_eq!(ingredient.amount, None);
    }

    #[test]
    fn test_chat_message_rejects_system_role() {
        let result =
            serde_json::from_value::<ChatMessage>(json!({"role": "system", "content": "x"}));
        assert!(result.is_err());
    }
}
