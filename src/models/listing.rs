//! Listing records
//!
//! Only the columns pricing needs are read from the `listings` table.

use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::pricing::models::{
    RateCard, RateCardError, DEFAULT_MAX_RENTAL_DAYS, DEFAULT_MIN_RENTAL_DAYS,
};

/// Listing from the `listings` table
#[derive(Debug, Clone, FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub daily_rate: Decimal,
    pub weekly_rate: Option<Decimal>,
    pub monthly_rate: Option<Decimal>,
    pub min_rental_days: Option<i32>,
    pub max_rental_days: Option<i32>,
    pub security_deposit: Option<Decimal>,
}

impl Listing {
    /// Build the rate card, filling unset bounds and deposit with defaults.
    pub fn rate_card(&self) -> Result<RateCard, RateCardError> {
        let card = RateCard {
            daily_rate: self.daily_rate,
            weekly_rate: self.weekly_rate,
            monthly_rate: self.monthly_rate,
            min_rental_days: day_bound(self.min_rental_days, DEFAULT_MIN_RENTAL_DAYS)?,
            max_rental_days: day_bound(self.max_rental_days, DEFAULT_MAX_RENTAL_DAYS)?,
            security_deposit: self.security_deposit.unwrap_or(Decimal::ZERO),
        };
        card.validate()?;
        Ok(card)
    }
}

fn day_bound(value: Option<i32>, default: u32) -> Result<u32, RateCardError> {
    match value {
        None => Ok(default),
        Some(days) => u32::try_from(days).map_err(|_| RateCardError::ZeroBound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing() -> Listing {
        Listing {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Mahindra 575 tractor".to_string(),
            daily_rate: dec!(1200),
            weekly_rate: Some(dec!(7000)),
            monthly_rate: None,
            min_rental_days: None,
            max_rental_days: None,
            security_deposit: None,
        }
    }

    #[test]
    fn test_rate_card_defaults() {
        let card = listing().rate_card().unwrap();
        assert_eq!(card.daily_rate, dec!(1200));
        assert_eq!(card.weekly_rate, Some(dec!(7000)));
        assert_eq!(card.min_rental_days, 1);
        assert_eq!(card.max_rental_days, 30);
        assert_eq!(card.security_deposit, dec!(0));
    }

    #[test]
    fn test_rate_card_explicit_bounds() {
        let mut listing = listing();
        listing.min_rental_days = Some(2);
        listing.max_rental_days = Some(45);
        listing.security_deposit = Some(dec!(5000));
        let card = listing.rate_card().unwrap();
        assert_eq!(card.min_rental_days, 2);
        assert_eq!(card.max_rental_days, 45);
        assert_eq!(card.security_deposit, dec!(5000));
    }

    #[test]
    fn test_rate_card_rejects_negative_and_inverted_bounds() {
        let mut negative = listing();
        negative.min_rental_days = Some(-1);
        assert_eq!(negative.rate_card(), Err(RateCardError::ZeroBound));

        let mut inverted = listing();
        inverted.min_rental_days = Some(10);
        inverted.max_rental_days = Some(3);
        assert_eq!(
            inverted.rate_card(),
            Err(RateCardError::InvertedBounds { min: 10, max: 3 })
        );
    }

    #[test]
    fn test_rate_card_rejects_zero_daily_rate() {
        let mut listing = listing();
        listing.daily_rate = dec!(0);
        assert!(listing.rate_card().is_err());
    }
}
