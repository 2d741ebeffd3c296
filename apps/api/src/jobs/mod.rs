// Job posting: LLM extraction, classification and insert-only persistence.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod repository;
