//! Booking request drafts.
//!
//! A draft is the record the booking screen hands to booking storage. It can
//! only be built from a priced, validated rental.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::calculators::price_and_validate;
use super::models::{DateRange, PickupMethod, PricingResult, RateCard, ValidationError};

/// Booking request ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub listing_id: Uuid,
    pub renter_id: Uuid,
    pub owner_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub security_deposit: Decimal,
    pub pickup_method: PickupMethod,
    pub notes: Option<String>,
}

/// Listing, owner and renter of a booking
#[derive(Debug, Clone)]
pub struct BookingParties {
    pub listing_id: Uuid,
    pub owner_id: Uuid,
    pub renter_id: Uuid,
}

/// Price the range and build the draft from the result.
pub fn draft_booking(
    parties: &BookingParties,
    range: &DateRange,
    rate_card: &RateCard,
    pickup_method: PickupMethod,
    notes: Option<&str>,
) -> Result<(BookingDraft, PricingResult), ValidationError> {
    let pricing = price_and_validate(range, rate_card)?;

    let notes = notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    let draft = BookingDraft {
        listing_id: parties.listing_id,
        renter_id: parties.renter_id,
        owner_id: parties.owner_id,
        start_date: range.start_date,
        end_date: range.end_date,
        total_amount: pricing.total_amount,
        security_deposit: pricing.security_deposit,
        pickup_method,
        notes,
    };

    Ok((draft, pricing))
}
