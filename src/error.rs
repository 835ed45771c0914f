use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the contact relay. Validation problems carry a
/// literal user-facing message; everything else collapses to a generic
/// message with the cause logged server-side only.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("mail relay is not configured")]
    RelayUnconfigured,
    #[error("smtp transport: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("bad mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("building mail message: {0}")]
    Message(#[from] lettre::error::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SiteError::Validation(msg) => (StatusCode::BAD_REQUEST, *msg),
            _ => {
                tracing::error!("Error sending email: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error sending message. Please try again later.",
                )
            }
        };
        (
            status,
            Json(json!({ "success": false, "message": message })),
        )
            .into_response()
    }
}
