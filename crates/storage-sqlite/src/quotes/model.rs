//! Database models for quotes.

use diesel::prelude::*;

/// Database model for quotes
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: String,
    pub text: String,
    pub author: String,
}

/// Columns written by an update; the id never changes.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct QuoteChangesetDB {
    pub text: String,
    pub author: String,
}

impl QuoteDB {
    /// Builds a row for a new quote under a fresh id.
    pub fn from_new(new_quote: citation_core::quotes::NewQuote, id: String) -> Self {
        Self {
            id,
            text: new_quote.text,
            author: new_quote.author,
        }
    }
}

// Conversion to domain models
impl From<QuoteDB> for citation_core::quotes::Quote {
    fn from(db: QuoteDB) -> Self {
        Self {
            id: db.id,
            text: db.text,
            author: db.author,
        }
    }
}

impl From<citation_core::quotes::QuoteUpdate> for QuoteChangesetDB {
    fn from(update: citation_core::quotes::QuoteUpdate) -> Self {
        Self {
            text: update.text,
            author: update.author,
        }
    }
}
