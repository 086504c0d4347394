//! Quotes module - domain models, services, and traits.

mod quotes_constants;
mod quotes_model;
mod quotes_service;
mod quotes_traits;

#[cfg(test)]
mod quotes_service_tests;

pub use quotes_constants::DEFAULT_QUOTES;
pub use quotes_model::{NewQuote, Quote, QuoteUpdate};
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
