use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use launchdash_core::ChartSpec;

use crate::dto::{PieQuery, ScatterQuery};
use crate::error::AppError;
use crate::state::AppState;

pub async fn pie(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PieQuery>,
) -> Json<ChartSpec> {
    let selection = state.selection(query.site.as_deref());
    Json(state.dashboard.pie_chart(&selection).into())
}

pub async fn scatter(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ChartSpec>, AppError> {
    let selection = state.selection(query.site.as_deref());
    let range = state.payload_range(query.low, query.high)?;
    Ok(Json(state.dashboard.scatter_chart(&selection, range).into()))
}
