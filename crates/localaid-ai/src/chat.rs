//! Chat wire types shared by the relay surface and the gateway call.
//!
//! The shapes are kept compatible with the OpenAI chat-completion REST
//! format so the gateway accepts the payload without translation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    /// The role of the message author (`"system"`, `"user"`, `"assistant"`).
    pub role: String,
    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// JSON body sent to the completion gateway.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionPayload {
    /// Model identifier the gateway should route to.
    pub model: String,
    /// The injected system prompt followed by the client history, in
    /// conversation order.
    pub messages: Vec<ChatMessage>,
    /// Always `true`; the relay only speaks SSE.
    pub stream: bool,
}
