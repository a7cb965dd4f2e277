//! Pricing API route handlers

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::AppState;

use super::format::CurrencyFormat;
use super::requests::{
    BookingDraftRequest, DateWindowQuery, FormatRequest, ListingQuoteRequest, QuoteRequest,
};
use super::responses::{
    BookingDraftResponse, DateWindowResponse, FormatResponse, ListingQuoteResponse, QuoteResponse,
};
use super::services;

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/listings/:listing_id/quote", post(quote_listing))
        .route("/listings/:listing_id/date-window", get(date_window))
        .route("/listings/:listing_id/booking-draft", post(booking_draft))
        .route("/format", post(format_amount))
}

fn today(state: &AppState) -> Option<NaiveDate> {
    state
        .config
        .reject_past_start_dates
        .then(|| Utc::now().date_naive())
}

/// Quote an inline rate card
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let result = services::quote_rate_card(&request.rate_card, &request.range())?;
    Ok(Json(QuoteResponse::new(&result, &state.config.currency)))
}

/// Quote a stored listing
async fn quote_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
    Json(request): Json<ListingQuoteRequest>,
) -> Result<Json<ListingQuoteResponse>> {
    let (listing, result) = services::quote_listing(
        &state.db,
        &state.cache,
        listing_id,
        &request.range(),
        today(&state),
    )
    .await?;

    Ok(Json(ListingQuoteResponse {
        listing_id: listing.id,
        title: listing.title.clone(),
        quote: QuoteResponse::new(&result, &state.config.currency),
    }))
}

/// End dates selectable after picking a start date
async fn date_window(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
    Query(query): Query<DateWindowQuery>,
) -> Result<Json<DateWindowResponse>> {
    let (rate_card, window) =
        services::listing_date_window(&state.db, &state.cache, listing_id, query.start_date)
            .await?;

    let window = window.ok_or_else(|| {
        AppError::BadRequest(format!("start date {} is out of range", query.start_date))
    })?;

    Ok(Json(DateWindowResponse {
        listing_id,
        start_date: query.start_date,
        suggested_end_date: window.suggested,
        earliest_end_date: window.earliest,
        latest_end_date: window.latest,
        min_rental_days: rate_card.min_rental_days,
        max_rental_days: rate_card.max_rental_days,
    }))
}

/// Price a booking request and return the record to store
async fn booking_draft(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
    Json(request): Json<BookingDraftRequest>,
) -> Result<Json<BookingDraftResponse>> {
    let (booking, result) = services::draft_listing_booking(
        &state.db,
        &state.cache,
        listing_id,
        &request,
        today(&state),
    )
    .await?;

    tracing::info!(
        "Booking draft for listing {}: {} day(s), total {}",
        listing_id,
        result.duration_days,
        result.total_amount
    );

    Ok(Json(BookingDraftResponse {
        booking,
        quote: QuoteResponse::new(&result, &state.config.currency),
    }))
}

/// Format an amount for display
async fn format_amount(
    State(state): State<AppState>,
    Json(request): Json<FormatRequest>,
) -> Json<FormatResponse> {
    let defaults = &state.config.currency;
    let format = CurrencyFormat::new(
        request.locale.unwrap_or_else(|| defaults.locale.clone()),
        request
            .currency_code
            .unwrap_or_else(|| defaults.currency_code.clone()),
    );

    Json(FormatResponse {
        formatted: format.format(request.amount),
        locale: format.locale,
        currency_code: format.currency_code,
    })
}
