//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS + unconditional cross-origin response headers,
//!   per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with
//!   `LOCALAID_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - The `/chat` relay route

mod chat;
pub mod doc;
mod health;

use std::sync::Arc;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new().merge(health::router()).merge(chat::router());

    let mut app = Router::new().merge(api_router);

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in; the set-header layers
        // sit outside the CORS layer so every response, error paths included,
        // leaves with the cross-origin headers.
        .layer(
            ServiceBuilder::new()
                .layer(cors::allow_origin_layer())
                .layer(cors::allow_headers_layer())
                .layer(cors::cors_layer()),
        )
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}
