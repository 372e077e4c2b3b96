//! Bullet Suggestion Coordinator — one suggestion request at a time for the
//! whole document.
//!
//! The busy flag is a one-permit semaphore. The permit lives for the duration
//! of the request and is released on every exit path, including the request
//! future being dropped. A request that finds the permit taken is rejected,
//! never queued.
//!
//! The lock is document-wide rather than per-entry: while one entry is being
//! regenerated, no other entry can request suggestions.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::document::{DocumentStore, EntityId, EntryKind};
use crate::suggestions::client::SuggestionService;
use crate::suggestions::context::SuggestionContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    /// Suggestions replaced the entry's bullets.
    Applied { bullet_count: usize },
    /// The entry was removed while the request was in flight.
    EntityRemoved,
    /// Another request is outstanding; nothing was sent.
    Busy,
    /// The service call failed; the entry is unchanged.
    Failed { reason: String },
}

#[derive(Clone)]
pub struct SuggestionCoordinator {
    service: Arc<dyn SuggestionService>,
    store: DocumentStore,
    busy: Arc<Semaphore>,
}

impl SuggestionCoordinator {
    pub fn new(service: Arc<dyn SuggestionService>, store: DocumentStore) -> Self {
        Self {
            service,
            store,
            busy: Arc::new(Semaphore::new(1)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.available_permits() == 0
    }

    /// Asks the service for bullets and, on success, replaces the bullets of
    /// entry `id` in whatever snapshot is current when the reply arrives. The
    /// entry kind is the context's kind, the same one sent on the wire.
    pub async fn request_suggestions(
        &self,
        id: EntityId,
        context: SuggestionContext,
    ) -> SuggestionOutcome {
        let kind = context.kind();
        let Ok(_permit) = self.busy.try_acquire() else {
            info!(kind = kind.as_str(), %id, "Suggestion request rejected: busy");
            return SuggestionOutcome::Busy;
        };

        info!(kind = kind.as_str(), %id, "Requesting bullet suggestions");

        let bullets = match self.service.suggest(&context).await {
            Ok(bullets) => bullets,
            Err(e) => {
                warn!(kind = kind.as_str(), %id, error = %e, "Bullet suggestion request failed");
                return SuggestionOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let bullet_count = bullets.len();
        let mut present = false;
        self.store.apply(|doc| {
            present = doc.contains(EntryKind::from(kind), id);
            doc.set_bullets(kind, id, bullets)
        });

        if !present {
            warn!(kind = kind.as_str(), %id, "Entry removed before suggestions arrived");
            return SuggestionOutcome::EntityRemoved;
        }

        info!(kind = kind.as_str(), %id, bullet_count, "Applied bullet suggestions");
        SuggestionOutcome::Applied { bullet_count }
    }
}
