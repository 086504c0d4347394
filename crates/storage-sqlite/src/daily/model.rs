//! Database models for daily picks.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::errors::StorageError;
use citation_core::daily::DailyPick;

/// Storage format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database model for daily picks
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_picks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyPickDB {
    pub date: String,
    pub quote_id: String,
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl From<DailyPick> for DailyPickDB {
    fn from(pick: DailyPick) -> Self {
        Self {
            date: date_key(pick.date),
            quote_id: pick.quote_id,
        }
    }
}

impl TryFrom<DailyPickDB> for DailyPick {
    type Error = StorageError;

    fn try_from(db: DailyPickDB) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&db.date, DATE_FORMAT).map_err(|e| {
            StorageError::SerializationError(format!("invalid pick date '{}': {}", db.date, e))
        })?;
        Ok(DailyPick {
            date,
            quote_id: db.quote_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_key(date), "2025-03-07");
    }

    #[test]
    fn test_conversion_round_trip() {
        let pick = DailyPick::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(), "q-1");
        let db = DailyPickDB::from(pick.clone());
        assert_eq!(db.date, "2024-12-31");
        assert_eq!(DailyPick::try_from(db).unwrap(), pick);
    }

    #[test]
    fn test_corrupt_date_is_rejected() {
        let db = DailyPickDB {
            date: "31/12/2024".to_string(),
            quote_id: "q-1".to_string(),
        };
        assert!(matches!(
            DailyPick::try_from(db),
            Err(StorageError::SerializationError(_))
        ));
    }
}
