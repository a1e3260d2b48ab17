#![cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::category::service::CategoryService;
use crate::errors::ServiceError;
use crate::news::domain::{NewNews, NewsRecord};
use crate::news::repository::NewsRepository;
use crate::news::service::NewsService;
use crate::storage::memory::MemoryStore;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn db_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(DatabaseConfig { url, max_connections: 5, min_connections: 1, ..DatabaseConfig::default() })
}

/// Migrated Postgres connection, or `None` when `DATABASE_URL` is unset.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = db_config() else {
        eprintln!("skip: DATABASE_URL not set (or SKIP_DB_TESTS set)");
        return Ok(None);
    };
    let migrated = MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(_) => false,
            }
        })
        .await;
    if !*migrated {
        anyhow::bail!("could not migrate DATABASE_URL");
    }
    Ok(Some(connect_with_config(&cfg).await?))
}

/// Category and news services sharing one fresh in-memory store.
pub fn memory_services() -> (Arc<CategoryService>, Arc<NewsService>) {
    let store = MemoryStore::new();
    let categories = Arc::new(CategoryService::new(store.clone()));
    let news = Arc::new(NewsService::new(store, categories.clone()));
    (categories, news)
}

/// Delegating news repository that counts every call reaching the store.
pub struct CountingNewsRepository {
    inner: Arc<MemoryStore>,
    calls: AtomicUsize,
}

impl CountingNewsRepository {
    pub fn new(inner: Arc<MemoryStore>) -> Self { Self { inner, calls: AtomicUsize::new(0) } }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

    fn hit(&self) { self.calls.fetch_add(1, Ordering::SeqCst); }
}

#[async_trait]
impl NewsRepository for CountingNewsRepository {
    async fn find_all(&self) -> Result<Vec<NewsRecord>, ServiceError> {
        self.hit();
        NewsRepository::find_all(&*self.inner).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<NewsRecord>, ServiceError> {
        self.hit();
        NewsRepository::find_by_id(&*self.inner, id).await
    }

    async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<NewsRecord>, ServiceError> {
        self.hit();
        self.inner.find_by_category_id(category_id).await
    }

    async fn insert(&self, news: NewNews) -> Result<models::news::Model, ServiceError> {
        self.hit();
        NewsRepository::insert(&*self.inner, news).await
    }

    async fn update(&self, model: models::news::Model) -> Result<models::news::Model, ServiceError> {
        self.hit();
        NewsRepository::update(&*self.inner, model).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        self.hit();
        NewsRepository::delete_by_id(&*self.inner, id).await
    }
}
