use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejections render through `ApiError`, so a
/// malformed or mistyped body is a 400 with the usual `{"error": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
