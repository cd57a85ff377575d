// src/routes/mod.rs

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

pub mod health;
pub mod reports;
pub mod schedules;
pub mod tickets;
pub mod visits;

/// Fixed-shape error body: every failure from this layer looks the same.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ErrorResponse = (StatusCode, Json<ErrorBody>);

/// Maps any datastore failure to a generic 500. The underlying error is
/// logged but never forwarded to the caller.
pub fn query_failed(context: &'static str) -> impl Fn(sqlx::Error) -> ErrorResponse {
    move |e| {
        tracing::error!(error = %e, "{context}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: context.to_string() }),
        )
    }
}
