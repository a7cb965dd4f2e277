//! Core rental pricing functions.
//!
//! Pure functions only: no clock, no database, no logging. Every booking
//! screen prices through [`price_and_validate`] so there is a single copy
//! of the tier arithmetic.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::models::{
    BreakdownLine, DateRange, PricingResult, RateCard, UnitType, ValidationError, DAYS_PER_MONTH,
    DAYS_PER_WEEK,
};

/// Inclusive day count of a date range.
///
/// Both the start and end day are billed, so a same-day rental is one day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rental_pricing::pricing::{compute_duration, DateRange};
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert_eq!(compute_duration(&DateRange::new(day, day)), Ok(1));
/// ```
pub fn compute_duration(range: &DateRange) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidRange {
        start: range.start_date,
        end: range.end_date,
    };

    if range.end_date < range.start_date {
        return Err(invalid());
    }

    let days = (range.end_date - range.start_date).num_days() + 1;
    u32::try_from(days).map_err(|_| invalid())
}

/// Check a duration against the card's inclusive min/max bounds.
pub fn validate_duration(duration_days: u32, rate_card: &RateCard) -> Result<(), ValidationError> {
    if duration_days < rate_card.min_rental_days {
        return Err(ValidationError::BelowMinimumDuration {
            min: rate_card.min_rental_days,
            actual: duration_days,
        });
    }
    if duration_days > rate_card.max_rental_days {
        return Err(ValidationError::AboveMaximumDuration {
            max: rate_card.max_rental_days,
            actual: duration_days,
        });
    }
    Ok(())
}

/// Price a rental of `duration_days` days.
///
/// Tiers are tried top-down and the first one whose threshold is met wins:
/// monthly (30+ days), then weekly (7+ days), then daily. Leftover days are
/// billed at the daily rate. No cheaper mix of tiers is searched for.
/// The security deposit is copied through and never summed into the total.
///
/// Amounts cannot overflow for a card that passed [`RateCard::validate`]
/// and a duration within its `max_rental_days`.
pub fn price_rental(duration_days: u32, rate_card: &RateCard) -> PricingResult {
    let tier = match (rate_card.monthly_rate, rate_card.weekly_rate) {
        (Some(monthly), _) if duration_days >= DAYS_PER_MONTH => {
            Some((UnitType::Month, DAYS_PER_MONTH, monthly))
        }
        (_, Some(weekly)) if duration_days >= DAYS_PER_WEEK => {
            Some((UnitType::Week, DAYS_PER_WEEK, weekly))
        }
        _ => None,
    };

    let mut breakdown = Vec::with_capacity(2);
    let remaining_days = match tier {
        Some((unit_type, unit_days, unit_rate)) => {
            breakdown.push(BreakdownLine::new(
                unit_type,
                duration_days / unit_days,
                unit_rate,
            ));
            duration_days % unit_days
        }
        None => duration_days,
    };

    if remaining_days > 0 {
        breakdown.push(BreakdownLine::new(
            UnitType::Day,
            remaining_days,
            rate_card.daily_rate,
        ));
    }

    let total_amount = breakdown.iter().map(|line| line.subtotal).sum::<Decimal>();

    PricingResult {
        duration_days,
        total_amount,
        breakdown,
        security_deposit: rate_card.security_deposit,
    }
}

/// Compute the duration, validate it, then price it.
pub fn price_and_validate(
    range: &DateRange,
    rate_card: &RateCard,
) -> Result<PricingResult, ValidationError> {
    let duration_days = compute_duration(range)?;
    validate_duration(duration_days, rate_card)?;
    Ok(price_rental(duration_days, rate_card))
}

/// End date that gives the shortest allowed rental starting on `start`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use rental_pricing::pricing::calculators::suggested_end_date;
/// use rental_pricing::pricing::RateCard;
///
/// let card = RateCard::daily(dec!(500)).with_bounds(3, 30);
/// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert_eq!(suggested_end_date(start, &card), NaiveDate::from_ymd_opt(2024, 6, 12));
/// ```
pub fn suggested_end_date(start: NaiveDate, rate_card: &RateCard) -> Option<NaiveDate> {
    offset_days(start, rate_card.min_rental_days)
}

/// Inclusive window of end dates that pass [`validate_duration`] for `start`.
///
/// Returns `None` when the card's bounds are inverted or the window falls
/// outside the representable calendar.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use rental_pricing::pricing::calculators::end_date_window;
/// use rental_pricing::pricing::RateCard;
///
/// let card = RateCard::daily(dec!(500)).with_bounds(2, 5);
/// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let (earliest, latest) = end_date_window(start, &card).unwrap();
/// assert_eq!(earliest, NaiveDate::from_ymd_opt(2024, 6, 11).unwrap());
/// assert_eq!(latest, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
/// ```
pub fn end_date_window(start: NaiveDate, rate_card: &RateCard) -> Option<(NaiveDate, NaiveDate)> {
    if rate_card.min_rental_days > rate_card.max_rental_days {
        return None;
    }
    let earliest = offset_days(start, rate_card.min_rental_days)?;
    let latest = offset_days(start, rate_card.max_rental_days)?;
    Some((earliest, latest))
}

/// Reject start dates before `today`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rental_pricing::pricing::calculators::ensure_not_in_past;
/// use rental_pricing::pricing::{DateRange, ValidationError};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
/// let range = DateRange::new(start, today);
/// assert_eq!(
///     ensure_not_in_past(&range, today),
///     Err(ValidationError::StartInPast { start, today })
/// );
/// ```
pub fn ensure_not_in_past(range: &DateRange, today: NaiveDate) -> Result<(), ValidationError> {
    if range.start_date < today {
        return Err(ValidationError::StartInPast {
            start: range.start_date,
            today,
        });
    }
    Ok(())
}

// A rental of `days` days starting on `start` ends `days - 1` days later.
fn offset_days(start: NaiveDate, days: u32) -> Option<NaiveDate> {
    let span = days.max(1) - 1;
    start.checked_add_days(Days::new(u64::from(span)))
}
