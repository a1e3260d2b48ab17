use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::category::domain::CategoryDto;
use crate::category::repository::CategoryRepository;
use crate::crud::{require_id, CrudService};
use crate::errors::ServiceError;

/// Application service for categories.
///
/// Besides the CRUD surface it hands out stored entities by id or title so
/// the news service can resolve references without going through DTOs.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self { Self { repo } }

    pub async fn get_category_by_id(&self, id: i64) -> Result<models::category::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::category_not_found(id))
    }

    /// Exact, case-sensitive match; the oldest category wins if titles repeat.
    pub async fn get_category_by_title(&self, title: &str) -> Result<models::category::Model, ServiceError> {
        self.repo
            .find_by_title(title)
            .await?
            .ok_or_else(|| ServiceError::category_title_not_found(title))
    }

    pub async fn get_by_title(&self, title: &str) -> Result<CategoryDto, ServiceError> {
        self.get_category_by_title(title).await.map(Into::into)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        self.repo.exists_by_id(id).await
    }
}

#[async_trait]
impl CrudService<CategoryDto> for CategoryService {
    async fn get_all(&self) -> Result<Vec<CategoryDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<CategoryDto, ServiceError> {
        self.get_category_by_id(id).await.map(Into::into)
    }

    #[instrument(skip(self, item), fields(title = %item.title))]
    async fn create(&self, item: CategoryDto) -> Result<CategoryDto, ServiceError> {
        models::validation::validate_title(&item.title)?;
        let created = self.repo.insert(&item.title).await?;
        info!(id = created.id, "created category");
        Ok(created.into())
    }

    #[instrument(skip(self, item), fields(id = ?item.id))]
    async fn update(&self, item: CategoryDto) -> Result<CategoryDto, ServiceError> {
        let id = require_id(item.id)?;
        let mut existing = self.get_category_by_id(id).await?;
        models::validation::validate_title(&item.title)?;
        existing.title = item.title;
        let updated = self.repo.update(existing).await?;
        info!(id, "updated category");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.get_category_by_id(id).await?;
        if !self.repo.delete_by_id(id).await? {
            // Removed concurrently between lookup and delete
            return Err(ServiceError::category_not_found(id));
        }
        info!(id, "deleted category and its news");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_services;

    #[tokio::test]
    async fn create_then_get_returns_equal_category() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        let created = categories.create(CategoryDto::new("Sport")).await?;
        let id = created.id.expect("server assigns id");
        assert_eq!(categories.get_by_id(id).await?, created);
        assert_eq!(created.title, "Sport");
        Ok(())
    }

    #[tokio::test]
    async fn create_ignores_client_id() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        let created = categories.create(CategoryDto::with_id(99, "Sport")).await?;
        assert_eq!(created.id, Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn get_all_keeps_storage_order() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        for t in ["b", "a", "c"] {
            categories.create(CategoryDto::new(t)).await?;
        }
        let titles: Vec<String> = categories.get_all().await?.into_iter().map(|c| c.title).collect();
        assert_eq!(titles, ["b", "a", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_lookups_fail_with_not_found() {
        let (categories, _) = memory_services();
        let err = categories.get_by_id(7).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Category not found with id: 7");

        let err = categories.get_by_title("Nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found with title: Nope");
    }

    #[tokio::test]
    async fn update_replaces_title_only() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        let created = categories.create(CategoryDto::new("Sport")).await?;
        let updated = categories.update(CategoryDto { id: created.id, title: "Sports".into() }).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Sports");
        assert!(categories.get_by_title("Sport").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_writes_nothing() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        categories.create(CategoryDto::new("Sport")).await?;
        let err = categories.update(CategoryDto::with_id(42, "Other")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let all = categories.get_all().await?;
        assert_eq!(all, vec![CategoryDto::with_id(1, "Sport")]);
        Ok(())
    }

    #[tokio::test]
    async fn update_without_id_is_a_validation_error() {
        let (categories, _) = memory_services();
        let err = categories.update(CategoryDto::new("Sport")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn blank_title_rejected_on_create_and_update() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        assert!(matches!(categories.create(CategoryDto::new(" ")).await, Err(ServiceError::Model(_))));
        let created = categories.create(CategoryDto::new("Sport")).await?;
        let err = categories.update(CategoryDto { id: created.id, title: String::new() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert_eq!(categories.get_by_id(1).await?.title, "Sport");
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_exists_is_false() -> Result<(), anyhow::Error> {
        let (categories, _) = memory_services();
        let id = categories.create(CategoryDto::new("Sport")).await?.id.unwrap();
        assert!(categories.exists_by_id(id).await?);
        categories.delete(id).await?;
        assert!(!categories.exists_by_id(id).await?);
        assert!(matches!(categories.get_by_id(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(categories.delete(id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
