//! Cross-origin layers for the relay surface.
//!
//! The relay is called from browser widgets on arbitrary origins, so the
//! contract is a wildcard: every response, success or failure, must carry
//! `Access-Control-Allow-Origin: *` and the allowed-header list.  The
//! [`CorsLayer`] answers browser preflights; the two set-header layers make
//! the same headers unconditional on ordinary responses as well.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Header list clients may send, mirrored back on every response.
pub static ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// `Access-Control-Allow-Origin: *` on responses the [`CorsLayer`] did not
/// already stamp.
pub fn allow_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

/// `Access-Control-Allow-Headers` on ordinary (non-preflight) responses.
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}
