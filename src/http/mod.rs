pub mod health;
pub mod ticket;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::error::AppError;

pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/process-ticket", post(ticket::process_ticket))
        .route("/health", get(health::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The one error boundary: every failure kind maps to a status code here.
/// Internal detail (model output, store errors) stays server-side; the
/// caller only ever sees the generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::TicketNotFound(_) => {
                (StatusCode::NOT_FOUND, "ticket not found".to_string())
            }
            AppError::InvalidRequest(reason) => {
                (StatusCode::UNPROCESSABLE_ENTITY, reason.clone())
            }
            AppError::Configuration(_)
            | AppError::Classification(_)
            | AppError::TicketStore(_)
            | AppError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal processing error".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
