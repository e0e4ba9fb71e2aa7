use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections render as the API's JSON error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
