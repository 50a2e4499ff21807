use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::page::index))
        .route("/api/layout", get(handlers::layout))
        .route("/api/charts/pie", get(handlers::charts::pie))
        .route("/api/charts/scatter", get(handlers::charts::scatter))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/assets/dashboard.js", get(handlers::page::script))
        .route("/health", get(handlers::health))
        .with_state(state)
}
