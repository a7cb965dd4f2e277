//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::booking::BookingDraft;
use super::format::CurrencyFormat;
use super::models::{BreakdownLine, PricingResult, UnitType};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// One breakdown line
#[derive(Debug, Serialize)]
pub struct BreakdownLineResponse {
    pub unit_type: UnitType,
    pub unit_count: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
}

impl From<&BreakdownLine> for BreakdownLineResponse {
    fn from(line: &BreakdownLine) -> Self {
        Self {
            unit_type: line.unit_type,
            unit_count: line.unit_count,
            unit_rate: line.unit_rate,
            subtotal: line.subtotal,
        }
    }
}

/// Response for a rental quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub duration_days: u32,
    pub total: MoneyResponse,
    pub security_deposit: MoneyResponse,
    pub breakdown: Vec<BreakdownLineResponse>,
    pub formatted_total: String,
    pub formatted_security_deposit: String,
}

impl QuoteResponse {
    pub fn new(result: &PricingResult, format: &CurrencyFormat) -> Self {
        Self {
            duration_days: result.duration_days,
            total: MoneyResponse::new(result.total_amount, &format.currency_code),
            security_deposit: MoneyResponse::new(result.security_deposit, &format.currency_code),
            breakdown: result.breakdown.iter().map(BreakdownLineResponse::from).collect(),
            formatted_total: format.format(result.total_amount),
            formatted_security_deposit: format.format(result.security_deposit),
        }
    }
}

/// Response for a listing quote
#[derive(Debug, Serialize)]
pub struct ListingQuoteResponse {
    pub listing_id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub quote: QuoteResponse,
}

/// Selectable end dates for a chosen start date
#[derive(Debug, Serialize)]
pub struct DateWindowResponse {
    pub listing_id: Uuid,
    pub start_date: NaiveDate,
    pub suggested_end_date: NaiveDate,
    pub earliest_end_date: NaiveDate,
    pub latest_end_date: NaiveDate,
    pub min_rental_days: u32,
    pub max_rental_days: u32,
}

/// Response for a booking draft
#[derive(Debug, Serialize)]
pub struct BookingDraftResponse {
    pub booking: BookingDraft,
    pub quote: QuoteResponse,
}

/// Response for amount formatting
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub formatted: String,
    pub locale: String,
    pub currency_code: String,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PricingErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error_type: error_type.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
