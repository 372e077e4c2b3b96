//! Suggestion service client — the only code that talks to the external bullet
//! suggestion service.
//!
//! The service is asked once per request; there is no retry. Callers treat
//! every error uniformly as "no suggestions this time".

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::document::BulletKind;
use crate::suggestions::context::SuggestionContext;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Suggestion service error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of suggested bullet lines. Carried by the coordinator as
/// `Arc<dyn SuggestionService>` so the backend can be swapped at startup.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, context: &SuggestionContext) -> Result<Vec<String>, SuggestionError>;
}

#[derive(Debug, Serialize)]
struct SuggestionRequest<'a> {
    context: &'a SuggestionContext,
    #[serde(rename = "type")]
    kind: BulletKind,
}

/// POSTs `{ "context": ..., "type": ... }` to the configured endpoint.
#[derive(Clone)]
pub struct HttpSuggestionService {
    client: Client,
    endpoint: String,
}

impl HttpSuggestionService {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl SuggestionService for HttpSuggestionService {
    async fn suggest(&self, context: &SuggestionContext) -> Result<Vec<String>, SuggestionError> {
        let request_body = SuggestionRequest {
            context,
            kind: context.kind(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SuggestionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        let bullets = extract_bullets(&body);
        debug!(count = bullets.len(), "Suggestion service returned bullets");
        Ok(bullets)
    }
}

/// Reads `bullets` from a success body. Absent or wrong-shaped → empty list.
fn extract_bullets(body: &serde_json::Value) -> Vec<String> {
    body.get("bullets")
        .and_then(|b| serde_json::from_value(b.clone()).ok())
        .unwrap_or_default()
}
