// Cover letter generation engine.
// Implements: keyword extraction, domain classification, bullet selection, letter rendering.
// Remote generation goes through llm_client only; nothing here calls the API directly.

pub mod bullets;
pub mod domain;
pub mod generator;
pub mod handlers;
pub mod keywords;
pub mod letter;
pub mod prompts;
