//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::models::{DateRange, PickupMethod, RateCard};

/// Request to quote against an inline rate card
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub rate_card: RateCard,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl QuoteRequest {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Request to quote a stored listing
#[derive(Debug, Deserialize)]
pub struct ListingQuoteRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ListingQuoteRequest {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Query for the selectable end-date window
#[derive(Debug, Deserialize)]
pub struct DateWindowQuery {
    pub start_date: NaiveDate,
}

/// Request to build a booking draft
#[derive(Debug, Deserialize)]
pub struct BookingDraftRequest {
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub pickup_method: PickupMethod,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingDraftRequest {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Request to format an amount
#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}
