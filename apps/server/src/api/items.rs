use std::sync::Arc;

use crate::{
    error::ApiResult, extract::AppJson, main_lib::AppState, models::CompsResponse,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use furnflip_core::items::StoredItem;
use furnflip_core::pricing::Recommendation;
use serde_json::{Map, Value};

async fn create_item(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<Value>,
) -> ApiResult<Json<StoredItem>> {
    let raw = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let item = state.item_service.create_item(raw).await?;
    Ok(Json(item))
}

async fn list_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<StoredItem>>> {
    let items = state.item_service.list_items()?;
    Ok(Json(items))
}

async fn get_item(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StoredItem>> {
    let item = state.item_service.get_item(id)?;
    Ok(Json(item))
}

async fn get_item_comps(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CompsResponse>> {
    let comps = state.comp_service.get_item_comps(id)?;
    Ok(Json(comps.into()))
}

async fn refresh_item_comps(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CompsResponse>> {
    let comps = state.comp_service.refresh_item_comps(id).await?;
    Ok(Json(comps.into()))
}

async fn get_item_recommendation(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Recommendation>> {
    let recommendation = state.item_service.recommend_for_item(id)?;
    Ok(Json(recommendation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item))
        .route(
            "/items/{id}/comps",
            get(get_item_comps).post(refresh_item_comps),
        )
        .route("/items/{id}/recommendation", get(get_item_recommendation))
}
