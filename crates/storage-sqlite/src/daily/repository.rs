use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use citation_core::daily::{DailyPick, DailyPickRepositoryTrait};
use citation_core::Result;

use super::model::{date_key, DailyPickDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::daily_picks;

/// Daily picks keyed by date.
///
/// The primary key on `date` is what keeps one pick per day: writers insert
/// with `ON CONFLICT DO NOTHING` and read back whatever row won.
pub struct DailyPickRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DailyPickRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DailyPickRepository { pool, writer }
    }

    fn load(conn: &mut SqliteConnection, date: &str) -> Result<Option<DailyPick>> {
        let pick_db = daily_picks::table
            .find(date)
            .select(DailyPickDB::as_select())
            .first::<DailyPickDB>(conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(pick_db.map(DailyPick::try_from).transpose()?)
    }

    fn insert_or_ignore(conn: &mut SqliteConnection, row: &DailyPickDB) -> Result<usize> {
        Ok(diesel::insert_into(daily_picks::table)
            .values(row)
            .on_conflict_do_nothing()
            .execute(conn)
            .map_err(StorageError::from)?)
    }

    fn load_persisted(conn: &mut SqliteConnection, date: &str) -> Result<DailyPick> {
        let pick_db = daily_picks::table
            .find(date)
            .select(DailyPickDB::as_select())
            .first::<DailyPickDB>(conn)
            .map_err(StorageError::from)?;
        Ok(DailyPick::try_from(pick_db)?)
    }
}

#[async_trait]
impl DailyPickRepositoryTrait for DailyPickRepository {
    fn get_pick(&self, date: NaiveDate) -> Result<Option<DailyPick>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load(&mut conn, &date_key(date))
    }

    async fn record_pick(&self, pick: DailyPick) -> Result<DailyPick> {
        let row = DailyPickDB::from(pick);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DailyPick> {
                if Self::insert_or_ignore(conn, &row)? == 0 {
                    debug!("Daily pick for {} already recorded", row.date);
                }
                Self::load_persisted(conn, &row.date)
            })
            .await
    }

    async fn replace_pick(&self, stale_quote_id: String, pick: DailyPick) -> Result<DailyPick> {
        let row = DailyPickDB::from(pick);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DailyPick> {
                let replaced = diesel::update(
                    daily_picks::table
                        .filter(daily_picks::date.eq(&row.date))
                        .filter(daily_picks::quote_id.eq(&stale_quote_id)),
                )
                .set(daily_picks::quote_id.eq(&row.quote_id))
                .execute(conn)
                .map_err(StorageError::from)?;

                if replaced == 0 {
                    debug!(
                        "Stale pick for {} was already replaced, keeping the current one",
                        row.date
                    );
                    Self::insert_or_ignore(conn, &row)?;
                }
                Self::load_persisted(conn, &row.date)
            })
            .await
    }
}
