use std::sync::Arc;

use crate::{main_lib::AppState, models::HealthResponse};
use axum::{routing::get, Json, Router};

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
