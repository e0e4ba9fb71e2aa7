use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    extract::AppJson,
    main_lib::AppState,
    models::RecommendationRequest,
};
use axum::{routing::post, Json, Router};
use furnflip_core::items::normalize_item;
use furnflip_core::pricing::{recommend, Recommendation};
use serde_json::{Map, Value};

/// Prices an ad-hoc item against caller-supplied comps. The item goes
/// through the same normalization as a stored one.
async fn create_recommendation(
    AppJson(body): AppJson<RecommendationRequest>,
) -> ApiResult<Json<Recommendation>> {
    let raw = match body.item {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(ApiError::BadRequest("item must be a JSON object".to_string())),
    };
    let item = normalize_item(&raw);
    Ok(Json(recommend(&item, &body.comps)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/recommendations", post(create_recommendation))
}
