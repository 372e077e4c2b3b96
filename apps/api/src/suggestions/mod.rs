// Bullet suggestions: context payload, service client, and the coordinator
// that merges results back through the document store.

pub mod client;
pub mod context;
pub mod coordinator;
pub mod handlers;
pub mod prompts;

#[cfg(test)]
pub mod stub;

pub use client::HttpSuggestionService;
pub use context::SuggestionContext;
pub use coordinator::{SuggestionCoordinator, SuggestionOutcome};
