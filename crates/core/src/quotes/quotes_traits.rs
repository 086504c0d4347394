use crate::errors::Result;
use crate::quotes::quotes_model::{NewQuote, Quote, QuoteUpdate};
use async_trait::async_trait;

/// Trait for quote repository operations
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Loads every quote in a stable order.
    fn list_quotes(&self) -> Result<Vec<Quote>>;
    fn get_quote(&self, quote_id: &str) -> Result<Option<Quote>>;
    fn count_quotes(&self) -> Result<i64>;
    async fn insert_quote(&self, new_quote: NewQuote) -> Result<Quote>;
    /// Returns `None` when no quote has the given id.
    async fn update_quote(&self, quote_id: String, update: QuoteUpdate) -> Result<Option<Quote>>;
    /// Returns the number of deleted rows.
    async fn delete_quote(&self, quote_id: String) -> Result<usize>;
    /// Inserts all quotes in one transaction, only if the store holds none.
    async fn insert_quotes_if_empty(&self, quotes: Vec<NewQuote>) -> Result<usize>;
}

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    fn get_quotes(&self) -> Result<Vec<Quote>>;
    fn get_quote(&self, quote_id: &str) -> Result<Quote>;
    fn count_quotes(&self) -> Result<i64>;
    /// Picks a quote uniformly at random.
    ///
    /// `exclude_id` is never returned while more than one quote exists.
    fn random_quote(&self, exclude_id: Option<&str>) -> Result<Quote>;
    async fn create_quote(&self, new_quote: NewQuote) -> Result<Quote>;
    async fn update_quote(&self, quote_id: &str, update: QuoteUpdate) -> Result<Quote>;
    async fn delete_quote(&self, quote_id: &str) -> Result<()>;
    async fn seed_default_quotes(&self) -> Result<usize>;
}
