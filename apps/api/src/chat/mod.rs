// Chat widget backend: predefined Q&A, keyword matching, per-client rate
// limiting and delegation to the hosted generator.
// All generator calls go through llm_client — no direct HTTP calls here.

pub mod booking;
mod content;
pub mod engine;
pub mod handlers;
pub mod knowledge_base;
pub mod matcher;
pub mod prompts;
pub mod rate_limiter;
pub mod sanitizer;
