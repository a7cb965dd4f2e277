//! Records read from the marketplace backend

pub mod listing;

pub use listing::Listing;
