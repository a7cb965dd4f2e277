//! In-memory caching using moka
//!
//! Listing rate fields change rarely compared to how often the booking
//! screens re-quote, so listings are cached by id with a TTL.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::queries;
use crate::models::Listing;

/// Number of listings loaded per warm-up pass
const WARM_BATCH_SIZE: i64 = 200;

/// Application cache holding listing records
#[derive(Clone)]
pub struct AppCache {
    /// Listings (id -> Listing)
    pub listings: Cache<Uuid, Arc<Listing>>,
}

impl AppCache {
    /// Create a new cache instance with the given listing TTL
    pub fn new(listing_ttl: Duration) -> Self {
        Self {
            listings: Cache::builder()
                .max_capacity(5_000)
                .time_to_live(listing_ttl)
                .time_to_idle(listing_ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            listings_size: self.listings.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.listings.invalidate_all();
        info!("All caches invalidated");
    }

    /// Invalidate a single listing after its rates were edited
    pub async fn invalidate_listing(&self, listing_id: Uuid) {
        self.listings.invalidate(&listing_id).await;
        info!("Cache invalidated for listing: {}", listing_id);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(15 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub listings_size: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes on every `every` tick.
pub async fn start_cache_warmer(cache: AppCache, db: PgPool, every: Duration) {
    let mut interval = interval(every);
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

/// Warm the cache with currently available listings
async fn warm_cache(cache: &AppCache, db: &PgPool) {
    info!("Starting cache warm-up...");

    match queries::get_available_listings(db, WARM_BATCH_SIZE).await {
        Ok(listings) => {
            for listing in listings {
                cache.listings.insert(listing.id, Arc::new(listing)).await;
            }
        }
        Err(e) => warn!("Failed to warm listing cache: {}", e),
    }

    cache.listings.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing() -> Listing {
        Listing {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Rotavator".to_string(),
            daily_rate: dec!(800),
            weekly_rate: None,
            monthly_rate: None,
            min_rental_days: None,
            max_rental_days: None,
            security_deposit: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_invalidate_listing() {
        let cache = AppCache::default();
        let listing = listing();
        let id = listing.id;

        cache.listings.insert(id, Arc::new(listing)).await;
        assert!(cache.listings.get(&id).await.is_some());

        cache.invalidate_listing(id).await;
        assert!(cache.listings.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn test_stats_count_entries() {
        let cache = AppCache::default();
        cache.listings.insert(Uuid::new_v4(), Arc::new(listing())).await;
        cache.listings.insert(Uuid::new_v4(), Arc::new(listing())).await;
        cache.listings.run_pending_tasks().await;
        assert_eq!(cache.stats().listings_size, 2);
    }
}
