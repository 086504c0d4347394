//! In-memory repositories shared by the service tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::daily::{DailyPick, DailyPickRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::quotes::{NewQuote, Quote, QuoteRepositoryTrait, QuoteUpdate};

// =========================================================================
// Mock QuoteRepository
// =========================================================================

#[derive(Clone, Default)]
pub struct MockQuoteRepository {
    quotes: Arc<Mutex<BTreeMap<String, Quote>>>,
    next_id: Arc<Mutex<u64>>,
    fail_reads: Arc<Mutex<bool>>,
}

impl MockQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding quotes with ids `q1`, `q2`, ... in the given order.
    pub fn with_texts(texts: &[&str]) -> Self {
        let repo = Self::new();
        for text in texts {
            repo.add(text, "");
        }
        repo
    }

    pub fn add(&self, text: &str, author: &str) -> Quote {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let quote = Quote {
            id: format!("q{}", next_id),
            text: text.to_string(),
            author: author.to_string(),
        };
        self.quotes
            .lock()
            .unwrap()
            .insert(quote.id.clone(), quote.clone());
        quote
    }

    pub fn remove(&self, quote_id: &str) {
        self.quotes.lock().unwrap().remove(quote_id);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.lock().unwrap() = fail;
    }

    fn check_reads(&self) -> Result<()> {
        if *self.fail_reads.lock().unwrap() {
            return Err(DatabaseError::ConnectionFailed("database is locked".into()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteRepositoryTrait for MockQuoteRepository {
    fn list_quotes(&self) -> Result<Vec<Quote>> {
        self.check_reads()?;
        Ok(self.quotes.lock().unwrap().values().cloned().collect())
    }

    fn get_quote(&self, quote_id: &str) -> Result<Option<Quote>> {
        self.check_reads()?;
        Ok(self.quotes.lock().unwrap().get(quote_id).cloned())
    }

    fn count_quotes(&self) -> Result<i64> {
        self.check_reads()?;
        Ok(self.quotes.lock().unwrap().len() as i64)
    }

    async fn insert_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        Ok(self.add(&new_quote.text, &new_quote.author))
    }

    async fn update_quote(&self, quote_id: String, update: QuoteUpdate) -> Result<Option<Quote>> {
        let mut quotes = self.quotes.lock().unwrap();
        Ok(quotes.get_mut(&quote_id).map(|quote| {
            quote.text = update.text;
            quote.author = update.author;
            quote.clone()
        }))
    }

    async fn delete_quote(&self, quote_id: String) -> Result<usize> {
        Ok(self
            .quotes
            .lock()
            .unwrap()
            .remove(&quote_id)
            .map_or(0, |_| 1))
    }

    async fn insert_quotes_if_empty(&self, quotes: Vec<NewQuote>) -> Result<usize> {
        if !self.quotes.lock().unwrap().is_empty() {
            return Ok(0);
        }
        let count = quotes.len();
        for quote in quotes {
            self.add(&quote.text, &quote.author);
        }
        Ok(count)
    }
}

// =========================================================================
// Mock DailyPickRepository
// =========================================================================

/// How a conflicting insert behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictMode {
    /// Keep the existing pick and return it.
    Coalesce,
    /// Fail with a uniqueness violation.
    Reject,
}

#[derive(Clone)]
pub struct MockDailyPickRepository {
    picks: Arc<Mutex<HashMap<NaiveDate, DailyPick>>>,
    conflict_mode: ConflictMode,
    /// Pick written just before the next write, simulating a concurrent caller.
    racing_pick: Arc<Mutex<Option<DailyPick>>>,
    writes: Arc<Mutex<usize>>,
}

impl MockDailyPickRepository {
    pub fn new(conflict_mode: ConflictMode) -> Self {
        Self {
            picks: Arc::default(),
            conflict_mode,
            racing_pick: Arc::default(),
            writes: Arc::default(),
        }
    }

    pub fn insert(&self, pick: DailyPick) {
        self.picks.lock().unwrap().insert(pick.date, pick);
    }

    pub fn pick(&self, date: NaiveDate) -> Option<DailyPick> {
        self.picks.lock().unwrap().get(&date).cloned()
    }

    pub fn race_next_write(&self, pick: DailyPick) {
        *self.racing_pick.lock().unwrap() = Some(pick);
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn apply_race(&self) {
        if let Some(pick) = self.racing_pick.lock().unwrap().take() {
            self.insert(pick);
        }
    }
}

#[async_trait]
impl DailyPickRepositoryTrait for MockDailyPickRepository {
    fn get_pick(&self, date: NaiveDate) -> Result<Option<DailyPick>> {
        Ok(self.pick(date))
    }

    async fn record_pick(&self, pick: DailyPick) -> Result<DailyPick> {
        self.apply_race();
        *self.writes.lock().unwrap() += 1;
        let mut picks = self.picks.lock().unwrap();
        if let Some(existing) = picks.get(&pick.date) {
            return match self.conflict_mode {
                ConflictMode::Coalesce => Ok(existing.clone()),
                ConflictMode::Reject => Err(Error::Database(DatabaseError::UniqueViolation(
                    "UNIQUE constraint failed: daily_picks.date".into(),
                ))),
            };
        }
        picks.insert(pick.date, pick.clone());
        Ok(pick)
    }

    async fn replace_pick(&self, stale_quote_id: String, pick: DailyPick) -> Result<DailyPick> {
        self.apply_race();
        *self.writes.lock().unwrap() += 1;
        let mut picks = self.picks.lock().unwrap();
        let entry = picks.entry(pick.date).or_insert_with(|| pick.clone());
        if entry.quote_id == stale_quote_id {
            *entry = pick;
        }
        Ok(entry.clone())
    }
}
