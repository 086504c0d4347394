use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::quotes_constants::DEFAULT_QUOTES;
use super::quotes_model::{NewQuote, Quote, QuoteUpdate};
use super::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing quotes
pub struct QuoteService {
    repository: Arc<dyn QuoteRepositoryTrait>,
    rng: Mutex<StdRng>,
}

impl QuoteService {
    /// Creates a service drawing random quotes from an OS-seeded generator.
    pub fn new(repository: Arc<dyn QuoteRepositoryTrait>) -> Self {
        Self::with_rng(repository, StdRng::from_entropy())
    }

    /// Creates a service with an explicit random source, e.g. a seeded one.
    pub fn with_rng(repository: Arc<dyn QuoteRepositoryTrait>, rng: StdRng) -> Self {
        QuoteService {
            repository,
            rng: Mutex::new(rng),
        }
    }

    fn not_found(quote_id: &str) -> Error {
        Error::NotFound(format!("Quote '{}'", quote_id))
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    fn get_quotes(&self) -> Result<Vec<Quote>> {
        self.repository.list_quotes()
    }

    fn get_quote(&self, quote_id: &str) -> Result<Quote> {
        self.repository
            .get_quote(quote_id)?
            .ok_or_else(|| Self::not_found(quote_id))
    }

    fn count_quotes(&self) -> Result<i64> {
        self.repository.count_quotes()
    }

    fn random_quote(&self, exclude_id: Option<&str>) -> Result<Quote> {
        let mut candidates = self.repository.list_quotes()?;
        if candidates.is_empty() {
            return Err(Error::EmptyStore);
        }

        // A single quote is returned even when excluded.
        if let Some(excluded) = exclude_id {
            if candidates.len() > 1 {
                candidates.retain(|quote| quote.id != excluded);
            }
        }

        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(0..candidates.len())
        };
        let chosen = candidates.swap_remove(index);
        debug!(
            "Picked quote {} (excluded: {})",
            chosen.id,
            exclude_id.unwrap_or("none")
        );
        Ok(chosen)
    }

    async fn create_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        new_quote.validate()?;
        let created = self.repository.insert_quote(new_quote).await?;
        debug!("Created quote {}", created.id);
        Ok(created)
    }

    async fn update_quote(&self, quote_id: &str, update: QuoteUpdate) -> Result<Quote> {
        update.validate()?;
        self.repository
            .update_quote(quote_id.to_string(), update)
            .await?
            .ok_or_else(|| Self::not_found(quote_id))
    }

    async fn delete_quote(&self, quote_id: &str) -> Result<()> {
        let deleted = self.repository.delete_quote(quote_id.to_string()).await?;
        if deleted == 0 {
            return Err(Self::not_found(quote_id));
        }
        debug!("Deleted quote {}", quote_id);
        Ok(())
    }

    async fn seed_default_quotes(&self) -> Result<usize> {
        let defaults = DEFAULT_QUOTES
            .iter()
            .map(|(text, author)| NewQuote::new(*text, *author))
            .collect();
        let inserted = self.repository.insert_quotes_if_empty(defaults).await?;
        if inserted > 0 {
            info!("Seeded {} default quotes", inserted);
        }
        Ok(inserted)
    }
}
