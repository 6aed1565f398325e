pub mod chat;
pub mod error;
pub mod gateway;
pub mod prompt;

pub use chat::{ChatMessage, CompletionPayload};
pub use error::GatewayError;
pub use gateway::GatewayClient;
pub use prompt::SYSTEM_PROMPT;
