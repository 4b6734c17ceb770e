use serde_json::{json, Value};
use tracing::error;
use vercel_runtime::{Body, Response, StatusCode};

use super::cors::CORS_HEADERS;
use crate::error::AppError;

/// Shown to callers in place of upstream detail.
pub const GENERATION_FAILED: &str = "An error occurred during analysis. Please try again.";

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            json!({"error":"Validation","field":field,"detail":message}),
        ),
        AppError::Form(issues) => (StatusCode::BAD_REQUEST, json!({"error":"Validation","issues":issues})),
        AppError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({"error":"Unauthorized"})),
        AppError::Decode(_) | AppError::Invocation(_) => {
            error!(error = %err, "feedback generation failed");
            (StatusCode::BAD_GATEWAY, json!({"error":"Upstream","detail":GENERATION_FAILED}))
        }
        AppError::Template(_) | AppError::Other(_) => {
            error!(error = %err, "internal error");
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Internal"}))
        }
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, header) in CORS_HEADERS {
        builder = builder.header(name, header);
    }
    Ok(builder.body(serde_json::to_string(value)?.into())?)
}

pub fn from_error(err: &AppError) -> anyhow::Result<Response<Body>> {
    let (status, body) = error_response(err);
    json_response(status, &body)
}
