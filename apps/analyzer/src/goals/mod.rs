// Goal Extraction: prompt building, one inference call, JSON answer parsing,
// and deterministic fallbacks for fields the model leaves empty.
// All model calls go through llm_client.

pub mod extractor;
pub mod fallback;
pub mod prompts;
