//! Citation Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the quote collection and the
//! daily quote rotation. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod daily;
pub mod errors;
pub mod quotes;

#[cfg(test)]
mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
