use async_trait::async_trait;

use crate::errors::ServiceError;

/// Repository abstraction for category persistence.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All rows in ascending id order.
    async fn find_all(&self) -> Result<Vec<models::category::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<models::category::Model>, ServiceError>;
    /// Lowest id among categories carrying exactly `title`.
    async fn find_by_title(&self, title: &str) -> Result<Option<models::category::Model>, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn insert(&self, title: &str) -> Result<models::category::Model, ServiceError>;
    /// Writes `title` of the row identified by `model.id`.
    async fn update(&self, model: models::category::Model) -> Result<models::category::Model, ServiceError>;
    /// Deletes the row and every news item it owns; returns whether it existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}
