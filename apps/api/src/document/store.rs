//! Document Store — owns the current snapshot for the editing session.
//!
//! Mutations run as a read-modify-write under the watch channel's lock, so an
//! operation always sees the latest snapshot and never a stale one. Subscribers
//! are only woken when the document actually changed.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::document::ids::{EntityId, IdAllocator};
use crate::document::models::{Document, EntryKind};

#[derive(Clone)]
pub struct DocumentStore {
    current: Arc<watch::Sender<Arc<Document>>>,
    ids: Arc<IdAllocator>,
}

impl DocumentStore {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(Document::default()));
        Self {
            current: Arc::new(sender),
            ids: Arc::new(IdAllocator::new()),
        }
    }

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.current.borrow())
    }

    /// Receiver that yields every new snapshot after a changing mutation.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Document>> {
        self.current.subscribe()
    }

    /// Applies `op` to the then-current snapshot and publishes the result.
    /// Returns the snapshot this call produced (or found, for a no-op), never
    /// one published by a later mutation.
    pub fn apply<F>(&self, op: F) -> Arc<Document>
    where
        F: FnOnce(&Document) -> Document,
    {
        let mut published = self.snapshot();
        let changed = self.current.send_if_modified(|doc| {
            let next = op(doc);
            let changed = next != **doc;
            if changed {
                *doc = Arc::new(next);
            }
            published = Arc::clone(doc);
            changed
        });
        debug!(changed, "Document mutation applied");
        published
    }

    /// Adds an entry using the session's id allocator.
    pub fn add_entry(&self, kind: EntryKind) -> (Arc<Document>, EntityId) {
        let id = self.ids.allocate();
        let doc = self.apply(|doc| doc.add_entry(kind, id));
        debug!(?kind, %id, "Entry added");
        (doc, id)
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
