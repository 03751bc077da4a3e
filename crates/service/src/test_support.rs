//! Shared helpers for DB-backed tests. Tests are skipped when
//! `SKIP_DB_TESTS` is set or the database is unreachable, so unit runs stay
//! green without Postgres.

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

static MIGRATED: OnceCell<bool> = OnceCell::const_new();

pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    let migrated = MIGRATED
        .get_or_init(|| async {
            match Migrator::up(&db, None).await {
                Ok(_) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    Some(db)
}
