//! Themed quote service.
//!
//! Prompts the configured generator and falls back to the local tables on
//! any failure, so `generate` only errors on invalid input.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::AiError;
use crate::fallback::fallback_quote;
use crate::prompt::build_prompt;

// ============================================================================
// Generator Trait
// ============================================================================

/// Text generation backend.
#[async_trait]
pub trait QuoteGeneratorTrait: Send + Sync {
    /// Returns the model's answer to `prompt`, already trimmed.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

// ============================================================================
// Service
// ============================================================================

/// Where a generated quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    Model,
    Fallback,
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteSource::Model => write!(f, "model"),
            QuoteSource::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQuote {
    pub theme: String,
    pub text: String,
    pub source: QuoteSource,
}

pub struct ThemeQuoteService {
    generator: Option<Arc<dyn QuoteGeneratorTrait>>,
    rng: Mutex<StdRng>,
}

impl ThemeQuoteService {
    /// `None` means no provider is configured and every quote is local.
    pub fn new(generator: Option<Arc<dyn QuoteGeneratorTrait>>) -> Self {
        Self::with_rng(generator, StdRng::from_entropy())
    }

    pub fn with_rng(generator: Option<Arc<dyn QuoteGeneratorTrait>>, rng: StdRng) -> Self {
        Self {
            generator,
            rng: Mutex::new(rng),
        }
    }

    pub async fn generate(&self, theme: &str) -> Result<GeneratedQuote, AiError> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(AiError::invalid_input("Theme must not be empty"));
        }

        if let Some(generator) = &self.generator {
            match generator.generate(&build_prompt(theme)).await {
                Ok(text) => {
                    return Ok(GeneratedQuote {
                        theme: theme.to_string(),
                        text,
                        source: QuoteSource::Model,
                    })
                }
                Err(e) => warn!("Quote generation failed for '{}', using fallback: {}", theme, e),
            }
        } else {
            debug!("No quote generator configured, using fallback for '{}'", theme);
        }

        let text = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            fallback_quote(theme, &mut *rng)
        };
        Ok(GeneratedQuote {
            theme: theme.to_string(),
            text,
            source: QuoteSource::Fallback,
        })
    }
}
