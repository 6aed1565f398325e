//! Streaming client for the upstream chat-completion gateway.
//!
//! One POST per relay request, no retries.  On success the raw
//! [`reqwest::Response`] is handed back with its body unread so the caller
//! can pipe the SSE stream through without buffering it.

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::chat::{ChatMessage, CompletionPayload};
use crate::error::GatewayError;
use crate::prompt::SYSTEM_PROMPT;

/// HTTP client for the AI completion gateway.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    url: String,
    api_key: Option<String>,
    model: String,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GatewayClient {
    /// Create a client for the given gateway endpoint.
    ///
    /// `api_key` may be absent; every call will then fail with
    /// [`GatewayError::MissingCredential`] before any network activity.
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .user_agent(concat!("localaid-ai/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: url.into(),
            api_key,
            model: model.into(),
        }
    }

    /// Build the upstream payload: the fixed system prompt first, then the
    /// client history unchanged and in order.
    ///
    /// Client-supplied `system` messages are dropped so the injected persona
    /// cannot be overridden or diluted.
    pub fn completion_payload(&self, history: &[ChatMessage]) -> CompletionPayload {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(SYSTEM_PROMPT));

        for msg in history {
            if msg.role == "system" {
                warn!("dropping client-supplied system message");
                continue;
            }
            messages.push(msg.clone());
        }

        CompletionPayload {
            model: self.model.clone(),
            messages,
            stream: true,
        }
    }

    /// POST the conversation to the gateway with `stream: true`.
    ///
    /// 429 and 402 map to their dedicated error variants; any other
    /// non-success status has its body read once for diagnostics and becomes
    /// [`GatewayError::UpstreamStatus`].
    pub async fn stream_chat(
        &self,
        history: &[ChatMessage],
    ) -> Result<reqwest::Response, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let payload = self.completion_payload(history);
        debug!(
            model = %payload.model,
            messages = payload.messages.len(),
            "forwarding conversation to AI gateway"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::TOO_MANY_REQUESTS => Err(GatewayError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => Err(GatewayError::PaymentRequired),
            _ => {
                let detail = response.text().await.unwrap_or_default();
                Err(GatewayError::UpstreamStatus { status, detail })
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
