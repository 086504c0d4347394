//! SQLite storage implementation for quotes.

mod model;
mod repository;

pub use model::{QuoteChangesetDB, QuoteDB};
pub use repository::QuoteRepository;
