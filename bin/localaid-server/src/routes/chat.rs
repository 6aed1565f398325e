//! Chat relay route.
//!
//! Accepts the assistant widget's conversation history, prepends the fixed
//! LocalBot system prompt, and forwards the exchange to the configured AI
//! gateway with `stream: true`.  The gateway's SSE body is piped back to the
//! caller chunk-for-chunk; it is never collected in the relay, so arbitrarily
//! long completions stream incrementally.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use futures::TryStream;
use tracing::info;
use utoipa::OpenApi;

use localaid_ai::ChatMessage;

use crate::error::RelayError;
use crate::models::chat::ChatRequest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(relay_chat), components(schemas(ChatRequest, ChatMessage)))]
pub struct ChatApi;

/// Register the chat relay routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(relay_chat).options(preflight))
}

/// Empty 200 for CORS probes.
///
/// Browser preflights carrying `Access-Control-Request-Method` are answered
/// by the CORS layer before they reach the router; this handler catches the
/// remaining plain `OPTIONS` requests so they never fall through to a 405,
/// and never touch the upstream.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Relay a conversation to the AI gateway (`POST /chat`).
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that malformed input still produces the `{"error": ...}` JSON shape the
/// chat widget renders inline.
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Completion chunks as a server-sent event stream"),
        (status = 400, description = "Body is not a valid chat request"),
        (status = 402, description = "Gateway billing exhausted"),
        (status = 429, description = "Gateway rate limit exceeded"),
        (status = 500, description = "Gateway or relay failure"),
    )
)]
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, RelayError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| RelayError::BadRequest(format!("invalid chat request: {e}")))?;

    info!(messages = request.messages.len(), "chat relay request received");

    let upstream = state.gateway.stream_chat(&request.messages).await?;
    Ok(event_stream_response(upstream.bytes_stream()))
}

/// Wrap an upstream byte stream as a `text/event-stream` response.
///
/// Each upstream chunk becomes one response frame, in arrival order; nothing
/// is coalesced or held back.  Dropping the response (client disconnect)
/// drops the upstream stream with it.
fn event_stream_response<S>(chunks: S) -> Response
where
    S: TryStream + Send + 'static,
    S::Ok: Into<Bytes>,
    S::Error: Into<axum::BoxError>,
{
    (
        [(header::CONTENT_TYPE, "text/event-stream")],
        Body::from_stream(chunks),
    )
        .into_response()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::routes;
    use axum::http::{Method, Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state(api_key: Option<&str>) -> Arc<AppState> {
        Arc::new(AppState::new(Config {
            bind_address: "127.0.0.1:0".into(),
            // Discard port: tests must never reach the network.
            gateway_url: "http://127.0.0.1:9/v1/chat/completions".into(),
            api_key: api_key.map(str::to_owned),
            model: "test-model".into(),
            log_level: "info".into(),
            log_json: false,
            enable_swagger: false,
        }))
    }

    fn assert_cors_headers(response: &Response) {
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*"),
        );
        let allow_headers = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        for name in ["authorization", "x-client-info", "apikey", "content-type"] {
            assert!(allow_headers.contains(name), "missing allowed header {name}");
        }
    }

    #[tokio::test]
    async fn options_is_answered_inside_the_relay() {
        let app = routes::build(test_state(Some("key")));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(&response);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty(), "preflight body should be empty");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_with_json_error() {
        let app = routes::build(test_state(Some("key")));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors_headers(&response);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(!json["error"].as_str().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn missing_credential_is_a_json_500_without_network() {
        let app = routes::build(test_state(None));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"messages":[{"role":"user","content":"hi"}]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors_headers(&response);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "LOCALAID_AI_API_KEY is not configured");
    }

    #[tokio::test]
    async fn unknown_request_fields_are_ignored() {
        let app = routes::build(test_state(None));
        // Extra fields must not turn a parseable request into a 400; with no
        // credential configured the request proceeds to the 500 branch.
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"messages":[{"role":"user","content":"hi"}],"session":"x"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn relayed_stream_preserves_chunk_boundaries_and_order() {
        let chunks = futures::stream::iter(vec![
            Ok::<Bytes, std::io::Error>(Bytes::from_static(b"Hel")),
            Ok(Bytes::from_static(b"lo, ")),
            Ok(Bytes::from_static(b"world")),
        ]);

        let response = event_stream_response(chunks);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("text/event-stream"),
        );

        let mut body = response.into_body();
        let mut frames = 0usize;
        let mut collected = Vec::new();
        while let Some(frame) = body.frame().await {
            let frame = frame.expect("relayed frame should be Ok");
            if let Some(data) = frame.data_ref() {
                frames += 1;
                collected.extend_from_slice(data);
            }
        }

        assert_eq!(collected, b"Hello, world");
        assert!(frames >= 3, "chunks must not be coalesced, got {frames} frames");
    }
}
