use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use crate::category::service::CategoryService;
use crate::crud::{require_id, CrudService};
use crate::errors::ServiceError;
use crate::news::domain::{NewNews, NewsDto, NewsRecord};
use crate::news::repository::NewsRepository;

/// Application service for news.
///
/// Writes reference the owning category by title; every create and update
/// resolves it through [`CategoryService`] and fails with `NotFound` before
/// touching the news store when the title does not match.
pub struct NewsService {
    repo: Arc<dyn NewsRepository>,
    categories: Arc<CategoryService>,
}

impl NewsService {
    pub fn new(repo: Arc<dyn NewsRepository>, categories: Arc<CategoryService>) -> Self {
        Self { repo, categories }
    }

    pub async fn get_news_by_id(&self, id: i64) -> Result<NewsRecord, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::news_not_found(id))
    }

    /// News of one category; unknown category ids fail without reading news.
    pub async fn get_by_category_id(&self, category_id: i64) -> Result<Vec<NewsDto>, ServiceError> {
        if !self.categories.exists_by_id(category_id).await? {
            return Err(ServiceError::category_not_found(category_id));
        }
        let rows = self.repo.find_by_category_id(category_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CrudService<NewsDto> for NewsService {
    async fn get_all(&self) -> Result<Vec<NewsDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<NewsDto, ServiceError> {
        self.get_news_by_id(id).await.map(Into::into)
    }

    #[instrument(skip(self, item), fields(category = %item.category_title))]
    async fn create(&self, item: NewsDto) -> Result<NewsDto, ServiceError> {
        let category = self.categories.get_category_by_title(&item.category_title).await?;
        models::validation::validate_title(&item.title)?;
        let news = self
            .repo
            .insert(NewNews {
                title: item.title,
                text: item.text,
                date: Utc::now(),
                category_id: category.id,
            })
            .await?;
        info!(id = news.id, category_id = category.id, "created news");
        Ok(NewsRecord { news, category }.into())
    }

    #[instrument(skip(self, item), fields(id = ?item.id, category = %item.category_title))]
    async fn update(&self, item: NewsDto) -> Result<NewsDto, ServiceError> {
        let id = require_id(item.id)?;
        let NewsRecord { news: mut existing, .. } = self.get_news_by_id(id).await?;
        let category = self.categories.get_category_by_title(&item.category_title).await?;
        models::validation::validate_title(&item.title)?;

        existing.title = item.title;
        existing.text = item.text;
        existing.category_id = category.id;

        let news = self.repo.update(existing).await?;
        info!(id, category_id = category.id, "updated news");
        Ok(NewsRecord { news, category }.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.get_news_by_id(id).await?;
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::news_not_found(id));
        }
        info!(id, "deleted news");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::domain::CategoryDto;
    use crate::test_support::{memory_services, CountingNewsRepository};
    use crate::storage::memory::MemoryStore;
    use chrono::SubsecRound;

    async fn seed(categories: &CategoryService, title: &str) -> i64 {
        categories.create(CategoryDto::new(title)).await.unwrap().id.unwrap()
    }

    #[tokio::test]
    async fn round_trip_resolves_category_title_and_second_precision_date() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        seed(&categories, "Title").await;

        let before = Utc::now().trunc_subsecs(0);
        let created = news.create(NewsDto::new("Headline", "Body", "Title")).await?;
        let after = Utc::now();

        let fetched = news.get_by_id(created.id.unwrap()).await?;
        assert_eq!(fetched, created);
        assert_eq!(fetched.category_title, "Title");
        let date = fetched.date.unwrap();
        assert_eq!(date, date.trunc_subsecs(0));
        assert!(date >= before && date <= after);
        Ok(())
    }

    #[tokio::test]
    async fn create_ignores_client_id_and_date() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        seed(&categories, "Sport").await;
        let mut dto = NewsDto::new("Derby", "2:1", "Sport");
        dto.id = Some(500);
        dto.date = Some(Utc::now() - chrono::Duration::days(365));
        let created = news.create(dto).await?;
        assert_eq!(created.id, Some(1));
        assert!(created.date.unwrap() > Utc::now() - chrono::Duration::minutes(1));
        Ok(())
    }

    #[tokio::test]
    async fn create_with_unknown_category_title_is_not_found() {
        let (categories, news) = memory_services();
        seed(&categories, "Sport").await;
        let err = news.create(NewsDto::new("Derby", "", "sport")).await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found with title: sport");
        assert!(news.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_date() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        seed(&categories, "Sport").await;
        seed(&categories, "Tech").await;
        let created = news.create(NewsDto::new("Derby", "2:1", "Sport")).await?;

        let mut change = NewsDto::new("Chip", "3nm", "Tech");
        change.id = created.id;
        change.date = Some(Utc::now() + chrono::Duration::days(3));
        let updated = news.update(change).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Chip");
        assert_eq!(updated.text, "3nm");
        assert_eq!(updated.category_title, "Tech");
        assert_eq!(updated.date, created.date);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_title_leaves_record_untouched() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        seed(&categories, "Sport").await;
        let created = news.create(NewsDto::new("Derby", "2:1", "Sport")).await?;

        let mut change = NewsDto::new("Changed", "Changed", "Missing");
        change.id = created.id;
        let err = news.update(change).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(news.get_by_id(created.id.unwrap()).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_id_is_not_found() {
        let (categories, news) = memory_services();
        seed(&categories, "Sport").await;
        let mut change = NewsDto::new("x", "y", "Sport");
        change.id = Some(12);
        let err = news.update(change).await.unwrap_err();
        assert_eq!(err.to_string(), "News not found with id: 12");
    }

    #[tokio::test]
    async fn unknown_category_id_never_reaches_news_store() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let categories = Arc::new(CategoryService::new(store.clone()));
        let counting = Arc::new(CountingNewsRepository::new(store.clone()));
        let news = NewsService::new(counting.clone(), categories.clone());

        let err = news.get_by_category_id(77).await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found with id: 77");
        assert_eq!(counting.calls(), 0);

        let id = seed(&categories, "Empty").await;
        assert!(news.get_by_category_id(id).await?.is_empty());
        assert_eq!(counting.calls(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn get_by_category_id_filters_by_owner() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        let sport = seed(&categories, "Sport").await;
        seed(&categories, "Tech").await;
        news.create(NewsDto::new("Derby", "", "Sport")).await?;
        news.create(NewsDto::new("Chip", "", "Tech")).await?;
        news.create(NewsDto::new("Final", "", "Sport")).await?;

        let titles: Vec<String> = news.get_by_category_id(sport).await?.into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["Derby", "Final"]);
        assert_eq!(news.get_all().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_category_cascades_to_news() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        let id = seed(&categories, "Title").await;
        let created = news.create(NewsDto::new("Headline", "Body", "Title")).await?;

        categories.delete(id).await?;
        let err = news.get_by_id(created.id.unwrap()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(news.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_news_is_not_found() -> Result<(), anyhow::Error> {
        let (categories, news) = memory_services();
        seed(&categories, "Sport").await;
        let created = news.create(NewsDto::new("Derby", "", "Sport")).await?;
        news.delete(created.id.unwrap()).await?;
        assert!(matches!(news.delete(created.id.unwrap()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
