//! Middleware stack for the API server
//!
//! Provides request tracing, timeouts and CORS.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Upper bound on a single request, including all aggregate queries
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply middleware stack to the router
pub fn apply_middleware(router: Router<AppState>, is_development: bool) -> Router<AppState> {
    let router = router.layer(
        ServiceBuilder::new()
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout (returns 503 Service Unavailable on timeout)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            )),
    );

    if is_development {
        tracing::warn!("CORS: Allowing any origin (development mode)");
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
