//! Entity Identity Allocator — timestamp-derived ids for list entities.
//!
//! Ids are the wall-clock time in milliseconds, bumped past the last issued id
//! whenever two allocations land in the same tick (or the clock steps back).
//! Every id is therefore strictly greater than all ids issued before it.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of one experience, education or project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl From<i64> for EntityId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out `EntityId`s. Shared by reference; safe to call from any thread.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self) -> EntityId {
        self.allocate_at(Utc::now().timestamp_millis())
    }

    /// Allocates against an explicit clock reading.
    fn allocate_at(&self, now_ms: i64) -> EntityId {
        let mut next = now_ms;
        // fetch_update retries the closure until the CAS lands, so `next`
        // always holds the value that was actually stored.
        let _ = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                next = now_ms.max(last + 1);
                Some(next)
            });
        EntityId(next)
    }
}
