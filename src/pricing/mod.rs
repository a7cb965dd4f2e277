//! Rental pricing engine.
//!
//! Prices equipment rentals against a listing's tiered daily/weekly/monthly
//! rate card and validates the requested duration. The calculators are pure;
//! the services and routes expose them over HTTP/JSON to the booking screens.

pub mod booking;
pub mod calculators;
pub mod format;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use booking::{draft_booking, BookingDraft, BookingParties};
pub use calculators::{compute_duration, price_and_validate, price_rental, validate_duration};
pub use format::CurrencyFormat;
pub use models::{
    BreakdownLine, DateRange, PricingResult, RateCard, RateCardError, UnitType, ValidationError,
};
pub use routes::router;
pub use services::PricingError;
