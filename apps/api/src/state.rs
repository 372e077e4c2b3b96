use crate::document::DocumentStore;
use crate::suggestions::SuggestionCoordinator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Current document snapshot for the editing session.
    pub store: DocumentStore,
    /// Gates and runs bullet suggestion requests against `store`.
    pub coordinator: SuggestionCoordinator,
}
