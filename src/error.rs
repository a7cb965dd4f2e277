//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::models::ValidationError;
use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, PricingErrorResponse) {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                PricingErrorResponse::new("not_found", "Not found"),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PricingErrorResponse::new("internal", "Database error"),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                PricingErrorResponse::new("bad_request", msg),
            ),
            AppError::Pricing(err) => match err {
                PricingError::Validation(e) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PricingErrorResponse::new(e.kind(), &e.to_string())
                        .with_details(validation_details(e)),
                ),
                PricingError::InvalidRateCard(e) => (
                    StatusCode::BAD_REQUEST,
                    PricingErrorResponse::new("invalid_rate_card", &e.to_string()),
                ),
                PricingError::ListingNotFound(_) => (
                    StatusCode::NOT_FOUND,
                    PricingErrorResponse::new("not_found", &err.to_string()),
                ),
                PricingError::Storage(e) => {
                    tracing::error!("Listing storage error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        PricingErrorResponse::new("internal", "Listing storage error"),
                    )
                }
            },
        }
    }
}

/// The violated bound, for building user-facing messages
fn validation_details(err: &ValidationError) -> serde_json::Value {
    match err {
        ValidationError::BelowMinimumDuration { min, actual } => json!({
            "min_rental_days": min,
            "duration_days": actual,
        }),
        ValidationError::AboveMaximumDuration { max, actual } => json!({
            "max_rental_days": max,
            "duration_days": actual,
        }),
        ValidationError::InvalidRange { start, end } => json!({
            "start_date": start,
            "end_date": end,
        }),
        ValidationError::StartInPast { start, today } => json!({
            "start_date": start,
            "today": today,
        }),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
