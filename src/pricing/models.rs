//! Domain types for rental pricing.
//!
//! Everything here is transient: built per pricing request, never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default minimum rental length when a listing leaves it unset
pub const DEFAULT_MIN_RENTAL_DAYS: u32 = 1;

/// Default maximum rental length when a listing leaves it unset
pub const DEFAULT_MAX_RENTAL_DAYS: u32 = 30;

/// Days covered by one weekly-rate unit
pub const DAYS_PER_WEEK: u32 = 7;

/// Days covered by one monthly-rate unit
pub const DAYS_PER_MONTH: u32 = 30;

/// Tiered rate schedule and rental-length bounds of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub weekly_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub monthly_rate: Option<Decimal>,
    #[serde(default = "default_min_rental_days")]
    pub min_rental_days: u32,
    #[serde(default = "default_max_rental_days")]
    pub max_rental_days: u32,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub security_deposit: Decimal,
}

fn default_min_rental_days() -> u32 {
    DEFAULT_MIN_RENTAL_DAYS
}

fn default_max_rental_days() -> u32 {
    DEFAULT_MAX_RENTAL_DAYS
}

impl RateCard {
    /// Daily-only rate card with default bounds and no deposit.
    pub fn daily(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            weekly_rate: None,
            monthly_rate: None,
            min_rental_days: DEFAULT_MIN_RENTAL_DAYS,
            max_rental_days: DEFAULT_MAX_RENTAL_DAYS,
            security_deposit: Decimal::ZERO,
        }
    }

    pub fn with_weekly_rate(mut self, rate: Decimal) -> Self {
        self.weekly_rate = Some(rate);
        self
    }

    pub fn with_monthly_rate(mut self, rate: Decimal) -> Self {
        self.monthly_rate = Some(rate);
        self
    }

    pub fn with_bounds(mut self, min_rental_days: u32, max_rental_days: u32) -> Self {
        self.min_rental_days = min_rental_days;
        self.max_rental_days = max_rental_days;
        self
    }

    pub fn with_security_deposit(mut self, deposit: Decimal) -> Self {
        self.security_deposit = deposit;
        self
    }

    /// Check the card is usable for pricing.
    pub fn validate(&self) -> Result<(), RateCardError> {
        if self.daily_rate <= Decimal::ZERO {
            return Err(RateCardError::NonPositiveRate {
                tier: UnitType::Day,
                rate: self.daily_rate,
            });
        }
        if let Some(rate) = self.weekly_rate.filter(|r| *r <= Decimal::ZERO) {
            return Err(RateCardError::NonPositiveRate {
                tier: UnitType::Week,
                rate,
            });
        }
        if let Some(rate) = self.monthly_rate.filter(|r| *r <= Decimal::ZERO) {
            return Err(RateCardError::NonPositiveRate {
                tier: UnitType::Month,
                rate,
            });
        }
        if self.security_deposit < Decimal::ZERO {
            return Err(RateCardError::NegativeDeposit(self.security_deposit));
        }
        if self.min_rental_days == 0 || self.max_rental_days == 0 {
            return Err(RateCardError::ZeroBound);
        }
        if self.min_rental_days > self.max_rental_days {
            return Err(RateCardError::InvertedBounds {
                min: self.min_rental_days,
                max: self.max_rental_days,
            });
        }
        if self.largest_total().is_none() {
            return Err(RateCardError::AmountOverflow {
                max_rental_days: self.max_rental_days,
            });
        }
        Ok(())
    }

    /// Upper bound on any total priced within `max_rental_days`, or `None`
    /// when that bound does not fit in a `Decimal`.
    ///
    /// A total is at most one tier subtotal plus `max_rental_days` daily
    /// units, so pricing a validated card never overflows.
    fn largest_total(&self) -> Option<Decimal> {
        let max_days = self.max_rental_days;
        let tier_units = |rate: Option<Decimal>, unit_days: u32| match rate {
            Some(rate) => rate.checked_mul(Decimal::from(max_days / unit_days)),
            None => Some(Decimal::ZERO),
        };

        let daily = self.daily_rate.checked_mul(Decimal::from(max_days))?;
        let weekly = tier_units(self.weekly_rate, DAYS_PER_WEEK)?;
        let monthly = tier_units(self.monthly_rate, DAYS_PER_MONTH)?;
        daily.checked_add(weekly.max(monthly))
    }
}

/// Requested rental period. Time of day is not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// Pricing tier of a breakdown line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Month,
    Week,
    Day,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Month => "month",
            UnitType::Week => "week",
            UnitType::Day => "day",
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a price breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownLine {
    pub unit_type: UnitType,
    pub unit_count: u32,
    pub unit_rate: Decimal,
    pub subtotal: Decimal,
}

impl BreakdownLine {
    pub fn new(unit_type: UnitType, unit_count: u32, unit_rate: Decimal) -> Self {
        Self {
            unit_type,
            unit_count,
            unit_rate,
            subtotal: unit_rate * Decimal::from(unit_count),
        }
    }
}

/// Priced rental.
///
/// `total_amount` is the sum of the breakdown subtotals; the deposit is
/// carried alongside and never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingResult {
    pub duration_days: u32,
    pub total_amount: Decimal,
    pub breakdown: Vec<BreakdownLine>,
    pub security_deposit: Decimal,
}

/// Rejected rental request. Each variant carries the bound that was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("rental of {actual} day(s) is shorter than the minimum of {min} day(s)")]
    BelowMinimumDuration { min: u32, actual: u32 },

    #[error("rental of {actual} day(s) is longer than the maximum of {max} day(s)")]
    AboveMaximumDuration { max: u32, actual: u32 },

    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("start date {start} is before today ({today})")]
    StartInPast { start: NaiveDate, today: NaiveDate },
}

impl ValidationError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::BelowMinimumDuration { .. } => "below_minimum_duration",
            ValidationError::AboveMaximumDuration { .. } => "above_maximum_duration",
            ValidationError::InvalidRange { .. } | ValidationError::StartInPast { .. } => {
                "invalid_range"
            }
        }
    }
}

/// Rate card that cannot be priced against
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateCardError {
    #[error("{tier} rate must be positive, got {rate}")]
    NonPositiveRate { tier: UnitType, rate: Decimal },

    #[error("security deposit cannot be negative, got {0}")]
    NegativeDeposit(Decimal),

    #[error("rental day bounds must be at least 1")]
    ZeroBound,

    #[error("minimum rental days ({min}) exceeds maximum ({max})")]
    InvertedBounds { min: u32, max: u32 },

    #[error("rates are too large to price a {max_rental_days}-day rental")]
    AmountOverflow { max_rental_days: u32 },
}

/// How the renter receives the equipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupMethod {
    #[default]
    Pickup,
    Delivery,
}
