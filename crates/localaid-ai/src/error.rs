use thiserror::Error;

/// Errors that can be returned by the gateway client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key is configured for the upstream gateway.
    #[error("AI gateway API key is not configured")]
    MissingCredential,

    /// The gateway reported 429 Too Many Requests.
    #[error("AI gateway rate limit exceeded")]
    RateLimited,

    /// The gateway reported 402 Payment Required (workspace out of credits).
    #[error("AI gateway billing exhausted")]
    PaymentRequired,

    /// Any other non-success gateway status.  `detail` is the raw upstream
    /// error body; it is meant for server-side logs, never for clients.
    #[error("AI gateway returned status {status}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// The HTTP request itself failed (connect, DNS, TLS, ...).
    #[error("request to AI gateway failed: {0}")]
    Transport(#[from] reqwest::Error),
}
