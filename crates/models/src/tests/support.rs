use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::db::connect;

// Migrations run once per test process, on a throwaway connection
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connected and migrated database, or `None` when no database is configured
/// (`DATABASE_URL` unset) or `SKIP_DB_TESTS` is set.
pub async fn test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set (or SKIP_DB_TESTS set)");
        return Ok(None);
    }
    let migrated = MIGRATED
        .get_or_init(|| async {
            match connect().await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(_) => false,
            }
        })
        .await;
    if !*migrated {
        anyhow::bail!("migrations failed against DATABASE_URL");
    }
    Ok(Some(connect().await?))
}
