use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::news::domain::{NewNews, NewsRecord};

/// Repository abstraction for news persistence. Reads return each row joined
/// with its owning category.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<NewsRecord>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<NewsRecord>, ServiceError>;
    async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<NewsRecord>, ServiceError>;
    async fn insert(&self, news: NewNews) -> Result<models::news::Model, ServiceError>;
    /// Writes `title`, `text` and `category_id`; `date` is left as stored.
    async fn update(&self, model: models::news::Model) -> Result<models::news::Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}
