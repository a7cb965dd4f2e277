//! Listing queries
//!
//! Pricing only reads listings; bookings are written by the caller.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Listing;

/// Find a listing by id
pub async fn find_listing(pool: &PgPool, listing_id: Uuid) -> Result<Option<Listing>> {
    let listing = sqlx::query_as::<_, Listing>(
        r#"
        SELECT
            id,
            owner_id,
            title,
            daily_rate,
            weekly_rate,
            monthly_rate,
            min_rental_days,
            max_rental_days,
            security_deposit
        FROM listings
        WHERE id = $1
        "#,
    )
    .bind(listing_id)
    .fetch_optional(pool)
    .await?;

    Ok(listing)
}

/// Get the most recently updated available listings (for cache warming)
pub async fn get_available_listings(pool: &PgPool, limit: i64) -> Result<Vec<Listing>> {
    let listings = sqlx::query_as::<_, Listing>(
        r#"
        SELECT
            id,
            owner_id,
            title,
            daily_rate,
            weekly_rate,
            monthly_rate,
            min_rental_days,
            max_rental_days,
            security_deposit
        FROM listings
        WHERE availability_status IS NULL
           OR availability_status = 'available'
        ORDER BY updated_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(listings)
}
