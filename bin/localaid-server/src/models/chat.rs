//! Request types for the relay surface.

use localaid_ai::ChatMessage;
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /chat`.
///
/// Only `messages` is read; anything else the client sends is ignored.  An
/// empty history is forwarded as-is, the gateway decides what to do with it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Conversation history in order, oldest first.
    pub messages: Vec<ChatMessage>,
}
