use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::category::{CategoryRepository, CategoryService};
use service::news::{NewsRepository, NewsService};
use service::storage::{MemoryStore, SeaOrmStore};

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub news: Arc<NewsService>,
}

impl AppState {
    pub fn from_repositories(
        categories: Arc<dyn CategoryRepository>,
        news: Arc<dyn NewsRepository>,
    ) -> Self {
        let categories = Arc::new(CategoryService::new(categories));
        let news = Arc::new(NewsService::new(news, categories.clone()));
        Self { categories, news }
    }

    pub fn postgres(db: DatabaseConnection) -> Self {
        let store = Arc::new(SeaOrmStore::new(db));
        Self::from_repositories(store.clone(), store)
    }

    /// Process-local store, empty on every start.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self::from_repositories(store.clone(), store)
    }
}
