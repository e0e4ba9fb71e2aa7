use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::AppJson,
    main_lib::AppState,
    models::{CompsRequest, CompsResponse},
};
use axum::{extract::State, routing::post, Json, Router};
use furnflip_core::comps::CompQuery;

/// One-off comp search that is not tied to a stored item.
async fn search_comps(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CompsRequest>,
) -> ApiResult<Json<CompsResponse>> {
    let query = CompQuery::new(
        body.category.as_deref().unwrap_or_default(),
        body.name.as_deref().unwrap_or_default(),
    );
    let comps = state.comp_service.fetch_comps(&query).await?;
    Ok(Json(comps.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/comps", post(search_comps))
}
