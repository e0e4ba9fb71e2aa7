use std::sync::Arc;

use crate::{extract::AppJson, main_lib::AppState, models::InterpretRequest};
use axum::{routing::post, Json, Router};
use furnflip_core::agent::{interpret, AgentReply};

/// Detects the furniture category in a chat message and patches the
/// conversation state with it.
async fn interpret_message(AppJson(body): AppJson<InterpretRequest>) -> Json<AgentReply> {
    Json(interpret(&body.message, &body.state))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/agent/interpret", post(interpret_message))
}
