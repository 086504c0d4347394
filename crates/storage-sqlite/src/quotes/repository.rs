use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use citation_core::quotes::{NewQuote, Quote, QuoteRepositoryTrait, QuoteUpdate};
use citation_core::Result;

use super::model::{QuoteChangesetDB, QuoteDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::quotes;

pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        QuoteRepository { pool, writer }
    }

    fn count_with(conn: &mut SqliteConnection) -> Result<i64> {
        Ok(quotes::table
            .count()
            .get_result::<i64>(conn)
            .map_err(StorageError::from)?)
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    fn list_quotes(&self) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let quotes_db = quotes::table
            .order((quotes::text.asc(), quotes::id.asc()))
            .select(QuoteDB::as_select())
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(quotes_db.into_iter().map(Quote::from).collect())
    }

    fn get_quote(&self, quote_id: &str) -> Result<Option<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let quote_db = quotes::table
            .find(quote_id)
            .select(QuoteDB::as_select())
            .first::<QuoteDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(quote_db.map(Quote::from))
    }

    fn count_quotes(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Self::count_with(&mut conn)
    }

    async fn insert_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Quote> {
                let new_quote_db = QuoteDB::from_new(new_quote, Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(quotes::table)
                    .values(&new_quote_db)
                    .returning(QuoteDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Quote::from(result_db))
            })
            .await
    }

    async fn update_quote(&self, quote_id: String, update: QuoteUpdate) -> Result<Option<Quote>> {
        let changeset = QuoteChangesetDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Quote>> {
                let result_db = diesel::update(quotes::table.find(&quote_id))
                    .set(&changeset)
                    .returning(QuoteDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                Ok(result_db.map(Quote::from))
            })
            .await
    }

    async fn delete_quote(&self, quote_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(quotes::table.find(&quote_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn insert_quotes_if_empty(&self, new_quotes: Vec<NewQuote>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                if Self::count_with(conn)? > 0 {
                    return Ok(0);
                }
                let rows: Vec<QuoteDB> = new_quotes
                    .into_iter()
                    .map(|quote| QuoteDB::from_new(quote, Uuid::new_v4().to_string()))
                    .collect();
                Ok(diesel::insert_into(quotes::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
