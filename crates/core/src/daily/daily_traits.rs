use async_trait::async_trait;
use chrono::NaiveDate;

use crate::daily::daily_model::{DailyPick, DailyQuote};
use crate::errors::Result;

/// Trait for daily pick repository operations
#[async_trait]
pub trait DailyPickRepositoryTrait: Send + Sync {
    fn get_pick(&self, date: NaiveDate) -> Result<Option<DailyPick>>;

    /// Records `pick` unless a pick already exists for its date.
    ///
    /// Returns the pick that is persisted for the date afterwards, which is
    /// the existing one when another writer got there first. Implementations
    /// may instead fail with `DatabaseError::UniqueViolation`.
    async fn record_pick(&self, pick: DailyPick) -> Result<DailyPick>;

    /// Swaps the quote of the pick for `pick.date` only while it still
    /// references `stale_quote_id`, then returns the persisted pick.
    async fn replace_pick(&self, stale_quote_id: String, pick: DailyPick) -> Result<DailyPick>;
}

/// Trait for the daily quote rotation
#[async_trait]
pub trait DailyQuoteServiceTrait: Send + Sync {
    /// Returns the quote of `today`, choosing and recording it on first call.
    async fn get_daily(&self, today: NaiveDate) -> Result<DailyQuote>;
}
