//! In-process `SuggestionService` for tests. Optionally holds every call until
//! the test releases the gate, so a request can be observed mid-flight.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::suggestions::client::{SuggestionError, SuggestionService};
use crate::suggestions::context::SuggestionContext;

pub enum Reply {
    Bullets(Vec<String>),
    Fail,
}

pub struct StubService {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl StubService {
    pub fn replying(bullets: &[&str]) -> Self {
        Self {
            reply: Reply::Bullets(bullets.iter().map(|b| b.to_string()).collect()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Reply::Fail,
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call waits for `gate.notify_one()` before replying.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionService for StubService {
    async fn suggest(&self, _context: &SuggestionContext) -> Result<Vec<String>, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.reply {
            Reply::Bullets(bullets) => Ok(bullets.clone()),
            Reply::Fail => Err(SuggestionError::Status {
                status: 500,
                message: "stub failure".to_string(),
            }),
        }
    }
}
