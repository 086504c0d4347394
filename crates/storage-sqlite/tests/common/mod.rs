use std::sync::Arc;

use citation_storage_sqlite::daily::DailyPickRepository;
use citation_storage_sqlite::db::{self, write_actor};
use citation_storage_sqlite::quotes::QuoteRepository;
use tempfile::TempDir;

/// Migrated database in a temporary directory. Keep it alive for the test.
pub struct TestDb {
    _dir: TempDir,
    pub quotes: Arc<QuoteRepository>,
    pub picks: Arc<DailyPickRepository>,
}

pub fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("test.db");
    let db_path = db::init(path.to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");
    let writer = write_actor::spawn_writer((*pool).clone());

    TestDb {
        _dir: dir,
        quotes: Arc::new(QuoteRepository::new(pool.clone(), writer.clone())),
        picks: Arc::new(DailyPickRepository::new(pool, writer)),
    }
}
