use std::sync::Arc;

use crate::{extract::AppJson, main_lib::AppState, models::FormRequest};
use axum::{routing::post, Json, Router};
use furnflip_core::forms::{resolve_form, FormSchema};

async fn get_form(AppJson(body): AppJson<FormRequest>) -> Json<FormSchema> {
    Json(resolve_form(body.category.as_deref().unwrap_or_default()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/form", post(get_form))
}
