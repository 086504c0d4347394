//! Citation AI - themed quote generation.
//!
//! Generates a short motivational quote for a free-form theme by prompting
//! a chat-completions model. When no model is configured, or the call fails,
//! a quote is drawn from a local table matched on the theme instead, so
//! callers always get text back.
//!
//! # Architecture
//!
//! - `prompt`: Prompt template and theme context hints
//! - `mistral`: `QuoteGeneratorTrait` implementation over the Mistral API
//! - `fallback`: Local themed quote tables
//! - `theme_quotes`: `ThemeQuoteService`, which ties the above together
//! - `error`: `AiError`
//!
//! # Example
//!
//! ```ignore
//! use citation_ai::{MistralConfig, MistralGenerator, ThemeQuoteService};
//!
//! let generator = MistralGenerator::new(MistralConfig::new(api_key))?;
//! let service = ThemeQuoteService::new(Some(Arc::new(generator)));
//! let quote = service.generate("tennis").await?;
//! println!("{} ({})", quote.text, quote.source);
//! ```

pub mod error;
pub mod fallback;
pub mod mistral;
pub mod prompt;
pub mod theme_quotes;

pub use error::AiError;
pub use mistral::{MistralConfig, MistralGenerator};
pub use theme_quotes::{GeneratedQuote, QuoteGeneratorTrait, QuoteSource, ThemeQuoteService};
