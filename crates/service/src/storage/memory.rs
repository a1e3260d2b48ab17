use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use models::validation::validate_title;
use models::{category, news};
use tokio::sync::RwLock;

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use crate::news::domain::{NewNews, NewsRecord};
use crate::news::repository::NewsRepository;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, category::Model>,
    news: BTreeMap<i64, news::Model>,
    last_category_id: i64,
    last_news_id: i64,
}

impl Tables {
    fn join(&self, n: &news::Model) -> Result<NewsRecord, ServiceError> {
        let category = self.categories.get(&n.category_id).cloned().ok_or_else(|| {
            ServiceError::Db(format!("news {} references missing category {}", n.id, n.category_id))
        })?;
        Ok(NewsRecord { news: n.clone(), category })
    }

    fn ensure_category(&self, id: i64) -> Result<(), ServiceError> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(ServiceError::Db(format!("foreign key violation: category {id} does not exist")))
        }
    }
}

/// Process-local store implementing both repositories over one lock.
///
/// Ids are assigned from per-table counters and never reused. Deleting a
/// category removes its news under the same write guard, matching the
/// `ON DELETE CASCADE` of the SQL schema.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> { Arc::new(Self::default()) }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<category::Model>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.categories.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<category::Model>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.categories.values().find(|c| c.title == title).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.categories.contains_key(&id))
    }

    async fn insert(&self, title: &str) -> Result<category::Model, ServiceError> {
        validate_title(title)?;
        let mut t = self.inner.write().await;
        t.last_category_id += 1;
        let model = category::Model { id: t.last_category_id, title: title.to_string() };
        t.categories.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: category::Model) -> Result<category::Model, ServiceError> {
        let mut t = self.inner.write().await;
        let stored = t
            .categories
            .get_mut(&model.id)
            .ok_or_else(|| ServiceError::Db(format!("category {} vanished before update", model.id)))?;
        stored.title = model.title;
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        let existed = t.categories.remove(&id).is_some();
        if existed {
            t.news.retain(|_, n| n.category_id != id);
        }
        Ok(existed)
    }
}

#[async_trait]
impl NewsRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<NewsRecord>, ServiceError> {
        let t = self.inner.read().await;
        t.news.values().map(|n| t.join(n)).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<NewsRecord>, ServiceError> {
        let t = self.inner.read().await;
        t.news.get(&id).map(|n| t.join(n)).transpose()
    }

    async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<NewsRecord>, ServiceError> {
        let t = self.inner.read().await;
        t.news
            .values()
            .filter(|n| n.category_id == category_id)
            .map(|n| t.join(n))
            .collect()
    }

    async fn insert(&self, news: NewNews) -> Result<news::Model, ServiceError> {
        validate_title(&news.title)?;
        let mut t = self.inner.write().await;
        t.ensure_category(news.category_id)?;
        t.last_news_id += 1;
        let model = news::Model {
            id: t.last_news_id,
            title: news.title,
            text: news.text,
            date: news.date.into(),
            category_id: news.category_id,
        };
        t.news.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: news::Model) -> Result<news::Model, ServiceError> {
        let mut t = self.inner.write().await;
        t.ensure_category(model.category_id)?;
        let stored = t
            .news
            .get_mut(&model.id)
            .ok_or_else(|| ServiceError::Db(format!("news {} vanished before update", model.id)))?;
        stored.title = model.title;
        stored.text = model.text;
        stored.category_id = model.category_id;
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        Ok(t.news.remove(&id).is_some())
    }
}
