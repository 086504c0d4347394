use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};

use super::daily_model::{DailyPick, DailyQuote};
use super::daily_traits::{DailyPickRepositoryTrait, DailyQuoteServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::quotes::{Quote, QuoteServiceTrait};

/// Number of selection rounds before giving up on a day whose winning pick
/// keeps pointing at deleted quotes.
const MAX_SELECTION_ROUNDS: usize = 3;

/// Daily quote rotation.
///
/// Each calendar day gets exactly one recorded pick. The first call of a day
/// draws a quote different from the previous day's (when more than one quote
/// exists) and records it; later calls return the recorded quote.
pub struct DailyQuoteService {
    quote_service: Arc<dyn QuoteServiceTrait>,
    pick_repository: Arc<dyn DailyPickRepositoryTrait>,
}

impl DailyQuoteService {
    pub fn new(
        quote_service: Arc<dyn QuoteServiceTrait>,
        pick_repository: Arc<dyn DailyPickRepositoryTrait>,
    ) -> Self {
        Self {
            quote_service,
            pick_repository,
        }
    }

    /// Resolves a pick to its quote; `None` if the quote was deleted since.
    fn resolve(&self, pick: &DailyPick) -> Result<Option<Quote>> {
        match self.quote_service.get_quote(&pick.quote_id) {
            Ok(quote) => Ok(Some(quote)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Quote id to avoid today: yesterday's pick, if it still resolves.
    fn previous_quote_id(&self, today: NaiveDate) -> Result<Option<String>> {
        let Some(yesterday) = today.pred_opt() else {
            return Ok(None);
        };
        let Some(previous) = self.pick_repository.get_pick(yesterday)? else {
            return Ok(None);
        };
        Ok(self.resolve(&previous)?.map(|quote| quote.id))
    }

    /// Persists `pick`, coalescing with whatever a concurrent caller recorded.
    async fn persist(&self, pick: DailyPick, stale_quote_id: Option<String>) -> Result<DailyPick> {
        let date = pick.date;
        let outcome = match stale_quote_id {
            Some(stale) => self.pick_repository.replace_pick(stale, pick).await,
            None => self.pick_repository.record_pick(pick).await,
        };

        match outcome {
            Ok(persisted) => Ok(persisted),
            Err(Error::Database(DatabaseError::UniqueViolation(detail))) => {
                debug!("Daily pick for {} already recorded ({})", date, detail);
                self.pick_repository.get_pick(date)?.ok_or_else(|| {
                    Error::Unexpected(format!(
                        "Daily pick for {} vanished after a uniqueness conflict",
                        date
                    ))
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl DailyQuoteServiceTrait for DailyQuoteService {
    async fn get_daily(&self, today: NaiveDate) -> Result<DailyQuote> {
        for _ in 0..MAX_SELECTION_ROUNDS {
            let stale_quote_id = match self.pick_repository.get_pick(today)? {
                Some(pick) => match self.resolve(&pick)? {
                    Some(quote) => return Ok(DailyQuote { date: today, quote }),
                    None => {
                        warn!(
                            "Quote {} picked for {} no longer exists, choosing again",
                            pick.quote_id, today
                        );
                        Some(pick.quote_id)
                    }
                },
                None => None,
            };

            let exclude_id = self.previous_quote_id(today)?;
            let candidate = self.quote_service.random_quote(exclude_id.as_deref())?;
            let persisted = self
                .persist(DailyPick::new(today, candidate.id.clone()), stale_quote_id)
                .await?;

            if persisted.quote_id == candidate.id {
                info!("Quote {} selected for {}", candidate.id, today);
                return Ok(DailyQuote {
                    date: today,
                    quote: candidate,
                });
            }

            // A concurrent caller recorded the day first.
            debug!(
                "Daily pick for {} already taken by quote {}",
                today, persisted.quote_id
            );
            if let Some(quote) = self.resolve(&persisted)? {
                return Ok(DailyQuote { date: today, quote });
            }
        }

        Err(Error::Unexpected(format!(
            "Could not settle the daily quote for {}",
            today
        )))
    }
}
