//! Read-only access to listing storage

pub mod queries;

pub use queries::*;
