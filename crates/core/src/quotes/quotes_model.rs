//! Quote domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a stored quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
}

/// Input model for creating a new quote
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

/// Input model for replacing the text and author of an existing quote
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteUpdate {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

impl NewQuote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_text(&self.text)
    }
}

impl QuoteUpdate {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_text(&self.text)
    }
}

/// Quote text must contain at least one non-whitespace character.
fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ValidationError::MissingField("text".to_string()).into());
    }
    Ok(())
}
