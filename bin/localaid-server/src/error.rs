//! Unified relay error type.
//!
//! Every handler returns `Result<T, RelayError>`, which implements
//! [`axum::response::IntoResponse`] so failures are converted to a JSON body
//! `{"error": "..."}` with an appropriate status code.  The CORS headers are
//! applied by middleware layers, so error responses carry them too.
//!
//! **Security note:** upstream gateway failures are logged with full detail
//! but only a generic message is returned to the caller, so upstream
//! internals never leak to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use localaid_ai::GatewayError;

/// All errors that can occur in the relay request lifecycle.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller sent a body that is not a valid chat request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Propagated from the gateway client.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, client_message) = match self {
            RelayError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),

            RelayError::Gateway(e) => match e {
                GatewayError::MissingCredential => {
                    error!("AI gateway credential missing; set LOCALAID_AI_API_KEY");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "LOCALAID_AI_API_KEY is not configured".to_owned(),
                    )
                }
                GatewayError::RateLimited => {
                    warn!("AI gateway rate limit exceeded");
                    (
                        StatusCode::TOO_MANY_REQUESTS,
                        "Rate limits exceeded, please try again later.".to_owned(),
                    )
                }
                GatewayError::PaymentRequired => {
                    warn!("AI gateway payment required");
                    (
                        StatusCode::PAYMENT_REQUIRED,
                        "Payment required, please add funds to your Lovable AI workspace."
                            .to_owned(),
                    )
                }
                GatewayError::UpstreamStatus { status, detail } => {
                    // Full upstream detail stays in the server logs only.
                    error!(
                        upstream_status = status.as_u16(),
                        detail = %detail,
                        "AI gateway error"
                    );
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "AI gateway error".to_owned(),
                    )
                }
                GatewayError::Transport(e) => {
                    error!(error = %e, "request to AI gateway failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
        };

        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_error(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let json: serde_json::Value =
            serde_json::from_slice(&bytes).expect("error body should be JSON");
        (status, json["error"].as_str().unwrap_or_default().to_owned())
    }

    #[tokio::test]
    async fn rate_limited_maps_to_429_with_fixed_message() {
        let response = RelayError::from(GatewayError::RateLimited).into_response();
        let (status, message) = body_error(response).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(message, "Rate limits exceeded, please try again later.");
    }

    #[tokio::test]
    async fn payment_required_maps_to_402_with_fixed_message() {
        let response = RelayError::from(GatewayError::PaymentRequired).into_response();
        let (status, message) = body_error(response).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(
            message,
            "Payment required, please add funds to your Lovable AI workspace."
        );
    }

    #[tokio::test]
    async fn other_upstream_statuses_map_to_generic_500() {
        let response = RelayError::from(GatewayError::UpstreamStatus {
            status: StatusCode::BAD_GATEWAY,
            detail: "secret upstream internals".to_owned(),
        })
        .into_response();
        let (status, message) = body_error(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "AI gateway error");
    }

    #[tokio::test]
    async fn missing_credential_maps_to_500_naming_the_variable() {
        let response = RelayError::from(GatewayError::MissingCredential).into_response();
        let (status, message) = body_error(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "LOCALAID_AI_API_KEY is not configured");
    }

    #[tokio::test]
    async fn bad_request_maps_to_400() {
        let response = RelayError::BadRequest("invalid chat request".into()).into_response();
        let (status, message) = body_error(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("invalid chat request"));
    }
}
