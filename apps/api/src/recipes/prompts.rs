// Prompt templates and builders for the recipe, vision, and dish-chat flows.
// Builders are pure: identical requests always produce identical prompts.

use crate::llm_client::prompts::{DIFFICULTY_SET, JSON_ONLY_INSTRUCTION, MOOD_SET, SANJI_PERSONA};
use crate::recipes::models::{ChatMessage, PantryRequest, PreferenceRequest, Recipe};

const ANY: &str = "any";
const NO_TIME_LIMIT: &str = "no strict limit";
const NOT_SPECIFIED: &str = "not specified";
const NORMAL_MODE: &str = "normal";

const COOKING_RULES: &str = "\
Cooking rules:
- Give realistic, cookable recipes a college student could make.
- Use measurements like cups, tbsp, tsp, grams, etc.
- Respect the user's difficulty and time limits when possible.
- If ingredients are very limited, be honest but creative.
- Avoid medical advice or health claims. Focus on cooking only.";

/// System prompt for both recipe flows: persona, rules, and the exact output shape.
pub fn sanji_system_prompt() -> String {
    format!(
        r#"{SANJI_PERSONA}

{COOKING_RULES}

Output rules:
- Respond following this exact schema:

{{
  "recipes": [
    {{
      "name": string,
      "estimatedTimeMinutes": integer,
      "difficulty": {DIFFICULTY_SET},
      "ingredients": [
        {{ "name": string, "amount": string }}
      ],
      "steps": [string],
      "sanjiComment": string,
      "sanjiMood": {MOOD_SET}
    }}
  ]
}}

{JSON_ONLY_INSTRUCTION}"#
    )
}

pub fn build_pantry_user_prompt(req: &PantryRequest) -> String {
    let ingredients = req.ingredients.join(", ");
    format!(
        "User pantry ingredients: {ingredients}

User constraints:
- Difficulty: {difficulty}
- Time limit (minutes): {time_limit}
- Mood / situation: {mood}
- Sanji mode: {mode}

Task:
- Using ONLY common pantry assumptions plus the listed ingredients, suggest 1 to 3 recipes the user can reasonably cook.
- If something critical is missing (like oil or salt), assume they have it by default.
- Fill in reasonable ingredient amounts and step-by-step instructions.
- Choose sanjiMood based on how you feel about the situation (happy, annoyed, flirty, serious).",
        difficulty = text_or(req.difficulty.as_deref(), ANY),
        time_limit = minutes_or(req.time_limit_minutes),
        mood = text_or(req.mood.as_deref(), NOT_SPECIFIED),
        mode = text_or(req.sanji_mode.as_deref(), NORMAL_MODE),
    )
}

pub fn build_preference_user_prompt(req: &PreferenceRequest) -> String {
    format!(
        "The user has no specific pantry list. They describe what they want instead.

User preferences:
- Dish type: {dish_type}
- Difficulty: {difficulty}
- Time limit (minutes): {time_limit}
- Budget: {budget}
- Reason / occasion: {reason}
- Diet: {diet}
- Sanji mode: {mode}

Task:
- Suggest 1 to 3 recipes that fit these preferences, using ingredients easy to find in a normal grocery store.
- Respect the diet strictly if one is given.
- Fill in reasonable ingredient amounts and step-by-step instructions.
- Choose sanjiMood based on how you feel about the request (happy, annoyed, flirty, serious).",
        dish_type = text_or(req.dish_type.as_deref(), ANY),
        difficulty = text_or(req.difficulty.as_deref(), ANY),
        time_limit = minutes_or(req.time_limit_minutes),
        budget = text_or(req.budget.as_deref(), NOT_SPECIFIED),
        reason = text_or(req.reason.as_deref(), NOT_SPECIFIED),
        diet = text_or(req.diet.as_deref(), NOT_SPECIFIED),
        mode = text_or(req.sanji_mode.as_deref(), NORMAL_MODE),
    )
}

/// System prompt for the photo flow. Only food is listed; the output is a flat name list.
pub const VISION_SYSTEM: &str = r#"You are Sanji's sharp kitchen eye. You look at a photo of someone's fridge, pantry, or countertop and list the food ingredients you can see.

Rules:
- List only food items and cooking ingredients (produce, meat, dairy, grains, spices, sauces, drinks used in cooking).
- Ignore everything that is not food: containers, utensils, appliances, packaging, furniture, people, pets.
- Use short, common ingredient names in singular form (e.g. "egg", "green onion", "soy sauce").
- List each ingredient once. Do not guess at items you cannot reasonably identify.
- If you see no food at all, return an empty list.

Respond following this exact schema:

{
  "ingredients": [
    { "name": string }
  ]
}

You MUST respond with a single valid JSON object. Do NOT include any text outside the JSON. Do NOT use markdown code fences."#;

pub const VISION_USER: &str =
    "Identify the food ingredients visible in this photo and return them as JSON.";

/// At most this many prior turns are replayed to the model.
pub const MAX_CHAT_HISTORY: usize = 20;

/// System prompt for chatting about one recipe the user picked.
pub fn build_dish_chat_system_prompt(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| match i.amount.as_deref().map(str::trim) {
            Some(amount) if !amount.is_empty() => format!("- {amount} {}", i.name),
            _ => format!("- {}", i.name),
        })
        .collect::<Vec<_>>()
        .join("\n");
    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(n, step)| format!("{}. {step}", n + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"{SANJI_PERSONA}

The user picked this dish and wants to talk about it:

Dish: {name}
Estimated time: {minutes} minutes
Ingredients:
{ingredients}
Steps:
{steps}

Answer questions about this dish: substitutions, timing, technique, serving. Stay in character. Keep answers short and practical. Avoid medical advice or health claims.

Respond following this exact schema:

{{
  "reply": string,
  "sanjiMood": {MOOD_SET}
}}

{JSON_ONLY_INSTRUCTION}"#,
        name = recipe.name,
        minutes = recipe.estimated_time_minutes,
    )
}

/// Keeps the most recent turns, oldest first.
pub fn recent_history(messages: &[ChatMessage]) -> &[ChatMessage] {
    let start = messages.len().saturating_sub(MAX_CHAT_HISTORY);
    &messages[start..]
}

fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
}

fn minutes_or(value: Option<u32>) -> String {
    match value {
        Some(minutes) if minutes > 0 => minutes.to_string(),
        _ => NO_TIME_LIMIT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::models::{ChatRole, Difficulty, Ingredient, SanjiMood};

    fn pantry(ingredients: &[&str]) -> PantryRequest {
        PantryRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn omurice() -> Recipe {
        Recipe {
            name: "Omurice".to_string(),
            estimated_time_minutes: 25,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                Ingredient {
                    name: "egg".to_string(),
                    amount: Some("2".to_string()),
                },
                Ingredient {
                    name: "ketchup".to_string(),
                    amount: None,
                },
            ],
            steps: vec!["Fry the rice.".to_string(), "Wrap in egg.".to_string()],
            sanji_comment: "Not bad.".to_string(),
            sanji_mood: SanjiMood::Happy,
        }
    }

    #[test]
    fn test_pantry_prompt_lists_every_ingredient_verbatim() {
        let prompt = build_pantry_user_prompt(&pantry(&["egg", "day-old rice", "Soy Sauce"]));
        assert!(prompt.contains("User pantry ingredients: egg, day-old rice, Soy Sauce"));
    }

    #[test]
    fn test_pantry_prompt_fallbacks() {
        let prompt = build_pantry_user_prompt(&pantry(&["egg"]));
        assert!(prompt.contains("- Difficulty: any"));
        assert!(prompt.contains("- Time limit (minutes): no strict limit"));
        assert!(prompt.contains("- Mood / situation: not specified"));
        assert!(prompt.contains("- Sanji mode: normal"));
    }

    #[test]
    fn test_pantry_prompt_uses_given_values() {
        let req = PantryRequest {
            ingredients: vec!["egg".to_string()],
            difficulty: Some("hard".to_string()),
            time_limit_minutes: Some(20),
            mood: Some("casual dinner alone".to_string()),
            sanji_mode: Some("chill".to_string()),
        };
        let prompt = build_pantry_user_prompt(&req);
        assert!(prompt.contains("- Difficulty: hard"));
        assert!(prompt.contains("- Time limit (minutes): 20"));
        assert!(prompt.contains("- Mood / situation: casual dinner alone"));
        assert!(prompt.contains("- Sanji mode: chill"));
    }

    #[test]
    fn test_blank_and_zero_count_as_omitted() {
        let req = PantryRequest {
            ingredients: vec!["egg".to_string()],
            difficulty: Some("   ".to_string()),
            time_limit_minutes: Some(0),
            mood: Some(String::new()),
            sanji_mode: None,
        };
        let prompt = build_pantry_user_prompt(&req);
        assert!(prompt.contains("- Difficulty: any"));
        assert!(prompt.contains("- Time limit (minutes): no strict limit"));
        assert!(prompt.contains("- Mood / situation: not specified"));
    }

    #[test]
    fn test_preference_prompt_all_omitted() {
        let prompt = build_preference_user_prompt(&PreferenceRequest::default());
        assert!(prompt.contains("- Dish type: any"));
        assert!(prompt.contains("- Difficulty: any"));
        assert!(prompt.contains("- Time limit (minutes): no strict limit"));
        assert!(prompt.contains("- Budget: not specified"));
        assert!(prompt.contains("- Reason / occasion: not specified"));
        assert!(prompt.contains("- Diet: not specified"));
        assert!(prompt.contains("- Sanji mode: normal"));
    }

    #[test]
    fn test_preference_prompt_uses_given_values() {
        let req = PreferenceRequest {
            dish_type: Some("soup".to_string()),
            budget: Some("under $10".to_string()),
            diet: Some("vegetarian".to_string()),
            ..Default::default()
        };
        let prompt = build_preference_user_prompt(&req);
        assert!(prompt.contains("- Dish type: soup"));
        assert!(prompt.contains("- Budget: under $10"));
        assert!(prompt.contains("- Diet: vegetarian"));
    }

    #[test]
    fn test_system_prompt_carries_enumerated_sets() {
        let prompt = sanji_system_prompt();
        assert!(prompt.contains(r#""difficulty": "easy" | "medium" | "hard""#));
        assert!(prompt.contains(r#""sanjiMood": "happy" | "annoyed" | "flirty" | "serious""#));
        assert!(prompt.contains("\"recipes\""));
    }

    #[test]
    fn test_system_prompt_asks_for_integer_minutes() {
        let prompt = sanji_system_prompt();
        assert!(prompt.contains(r#""estimatedTimeMinutes": integer"#));
        assert!(!prompt.contains(r#""estimatedTimeMinutes": number"#));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let req = pantry(&["egg", "rice"]);
        assert_eq!(build_pantry_user_prompt(&req), build_pantry_user_prompt(&req));
        assert_eq!(sanji_system_prompt(), sanji_system_prompt());
    }

    #[test]
    fn test_vision_prompt_suppresses_non_food() {
        assert!(VISION_SYSTEM.contains("Ignore everything that is not food"));
        assert!(VISION_SYSTEM.contains("\"ingredients\""));
        assert!(!VISION_SYSTEM.contains("sanjiMood"));
    }

    #[test]
    fn test_dish_chat_prompt_embeds_recipe() {
        let prompt = build_dish_chat_system_prompt(&omurice());
        assert!(prompt.contains("Dish: Omurice"));
        assert!(prompt.contains("- 2 egg"));
        assert!(prompt.contains("- ketchup"));
        assert!(prompt.contains("2. Wrap in egg."));
        assert!(prompt.contains(r#""sanjiMood": "happy" | "annoyed" | "flirty" | "serious""#));
    }

    #[test]
    fn test_recent_history_keeps_latest_turns() {
        let messages: Vec<ChatMessage> = (0..25)
            .map(|n| ChatMessage {
                role: ChatRole::User,
                content: n.to_string(),
            })
            .collect();
        let recent = recent_history(&messages);
        assert_eq!(recent.len(), MAX_CHAT_HISTORY);
        assert_eq!(recent[0].content, "5");
        assert_eq!(recent[MAX_CHAT_HISTORY - 1].content, "24");
    }
}
