// Recipe suggestions, photo ingredient detection, and dish chat.
// All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod image;
pub mod models;
pub mod normalize;
pub mod prompts;
