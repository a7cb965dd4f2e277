//! Pricing service functions with listing storage access.
//!
//! These load rate cards through the cache (falling back to the database)
//! and hand them to the pure calculators.

use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::db::queries;
use crate::models::Listing;

use super::booking::{draft_booking, BookingDraft, BookingParties};
use super::calculators::{
    end_date_window, ensure_not_in_past, price_and_validate, suggested_end_date,
};
use super::models::{DateRange, PricingResult, RateCard, RateCardError, ValidationError};
use super::requests::BookingDraftRequest;

/// Pricing calculation error types
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid rate card: {0}")]
    InvalidRateCard(#[from] RateCardError),

    #[error("Listing {0} not found")]
    ListingNotFound(Uuid),

    #[error("Listing storage error: {0}")]
    Storage(String),
}

/// End dates a renter may pick for a given start date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub suggested: NaiveDate,
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Quote an inline rate card.
pub fn quote_rate_card(
    rate_card: &RateCard,
    range: &DateRange,
) -> Result<PricingResult, PricingError> {
    rate_card.validate()?;
    Ok(price_and_validate(range, rate_card)?)
}

/// Load a listing, cache first.
pub async fn load_listing(
    pool: &PgPool,
    cache: &AppCache,
    listing_id: Uuid,
) -> Result<Arc<Listing>, PricingError> {
    if let Some(cached) = cache.listings.get(&listing_id).await {
        tracing::debug!("Cache HIT for listing: {}", listing_id);
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for listing: {}", listing_id);
    let listing = queries::find_listing(pool, listing_id)
        .await
        .map_err(|e| PricingError::Storage(e.to_string()))?
        .ok_or(PricingError::ListingNotFound(listing_id))?;

    let listing = Arc::new(listing);
    cache.listings.insert(listing_id, listing.clone()).await;
    Ok(listing)
}

/// Quote a stored listing for a date range.
///
/// When `today` is given, start dates before it are rejected.
pub async fn quote_listing(
    pool: &PgPool,
    cache: &AppCache,
    listing_id: Uuid,
    range: &DateRange,
    today: Option<NaiveDate>,
) -> Result<(Arc<Listing>, PricingResult), PricingError> {
    let listing = load_listing(pool, cache, listing_id).await?;
    let rate_card = listing.rate_card()?;

    if let Some(today) = today {
        ensure_not_in_past(range, today)?;
    }

    let result = price_and_validate(range, &rate_card)?;
    Ok((listing, result))
}

/// Selectable end-date window for a listing and start date.
///
/// `None` when the window runs past the end of the calendar.
pub async fn listing_date_window(
    pool: &PgPool,
    cache: &AppCache,
    listing_id: Uuid,
    start_date: NaiveDate,
) -> Result<(RateCard, Option<DateWindow>), PricingError> {
    let listing = load_listing(pool, cache, listing_id).await?;
    let rate_card = listing.rate_card()?;

    let window = end_date_window(start_date, &rate_card).and_then(|(earliest, latest)| {
        let suggested = suggested_end_date(start_date, &rate_card)?;
        Some(DateWindow {
            suggested,
            earliest,
            latest,
        })
    });

    Ok((rate_card, window))
}

/// Price a booking request for a listing and build its draft.
pub async fn draft_listing_booking(
    pool: &PgPool,
    cache: &AppCache,
    listing_id: Uuid,
    request: &BookingDraftRequest,
    today: Option<NaiveDate>,
) -> Result<(BookingDraft, PricingResult), PricingError> {
    let listing = load_listing(pool, cache, listing_id).await?;
    let rate_card = listing.rate_card()?;
    let range = request.range();

    if let Some(today) = today {
        ensure_not_in_past(&range, today)?;
    }

    let parties = BookingParties {
        listing_id: listing.id,
        owner_id: listing.owner_id,
        renter_id: request.renter_id,
    };

    Ok(draft_booking(
        &parties,
        &range,
        &rate_card,
        request.pickup_method,
        request.notes.as_deref(),
    )?)
}
