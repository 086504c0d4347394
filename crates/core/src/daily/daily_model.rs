//! Daily quote domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quotes::Quote;

/// Durable record of the quote chosen for one calendar day.
///
/// `date` is the natural key: at most one pick exists per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPick {
    pub date: NaiveDate,
    pub quote_id: String,
}

impl DailyPick {
    pub fn new(date: NaiveDate, quote_id: impl Into<String>) -> Self {
        Self {
            date,
            quote_id: quote_id.into(),
        }
    }
}

/// A daily pick resolved to its quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    pub date: NaiveDate,
    pub quote: Quote,
}
