pub mod charts;
pub mod page;

use std::sync::Arc;

use axum::{extract::State, Json};
use launchdash_core::Layout;

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.dashboard.table().len(),
    })
}

pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.dashboard.layout().clone())
}
