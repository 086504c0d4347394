use chrono::NaiveDate;
use citation_ai as ai;
use citation_core::daily as core_daily;
use citation_core::quotes as core_quotes;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
}

impl From<core_quotes::Quote> for Quote {
    fn from(q: core_quotes::Quote) -> Self {
        Self {
            id: q.id,
            text: q.text,
            author: q.author,
        }
    }
}

/// Reads `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /quotes`. Missing or null fields read as empty so that a
/// missing `text` is reported by validation rather than by the JSON extractor.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

impl From<NewQuote> for core_quotes::NewQuote {
    fn from(q: NewQuote) -> Self {
        core_quotes::NewQuote::new(q.text, q.author)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteUpdate {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

impl From<QuoteUpdate> for core_quotes::QuoteUpdate {
    fn from(q: QuoteUpdate) -> Self {
        core_quotes::QuoteUpdate::new(q.text, q.author)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    pub date: NaiveDate,
    pub quote: Quote,
}

impl From<core_daily::DailyQuote> for DailyQuote {
    fn from(d: core_daily::DailyQuote) -> Self {
        Self {
            date: d.date,
            quote: d.quote.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuoteRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub theme: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuote {
    pub theme: String,
    pub text: String,
    /// `model` or `fallback`.
    pub source: String,
}

impl From<ai::GeneratedQuote> for GeneratedQuote {
    fn from(g: ai::GeneratedQuote) -> Self {
        Self {
            theme: g.theme,
            text: g.text,
            source: g.source.to_string(),
        }
    }
}
