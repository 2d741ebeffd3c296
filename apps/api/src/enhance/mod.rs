// Description enhancement: grammar and spelling fixes in the author's own style.
// No persistence. All LLM calls go through llm_client.

pub mod classifier;
pub mod enhancer;
pub mod handlers;
pub mod prompts;
