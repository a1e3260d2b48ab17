use async_trait::async_trait;

use crate::errors::ServiceError;

/// The capability set shared by every resource service.
///
/// `T` is the wire representation. `create` ignores any id carried by the
/// item; `update` requires one and replaces the mutable fields in place.
#[async_trait]
pub trait CrudService<T>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>, ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<T, ServiceError>;
    async fn create(&self, item: T) -> Result<T, ServiceError>;
    async fn update(&self, item: T) -> Result<T, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// Id of an item sent for update; absent ids are a caller error.
pub(crate) fn require_id(id: Option<i64>) -> Result<i64, ServiceError> {
    id.ok_or_else(|| ServiceError::Validation("id is required for update".into()))
}
