//! SQLite storage implementation for Citation.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `citation-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for quotes and daily picks
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!  storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! Reads go through the r2d2 pool. Writes are funneled through a single
//! writer actor ([`db::write_actor`]) that runs each job in an immediate
//! transaction.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod daily;
pub mod quotes;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from citation-core for convenience
pub use citation_core::errors::{DatabaseError, Error, Result};
