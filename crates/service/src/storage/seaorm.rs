use async_trait::async_trait;
use models::{category, news};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    Unchanged,
};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use crate::news::domain::{NewNews, NewsRecord};
use crate::news::repository::NewsRepository;

/// SeaORM-backed implementation of both repositories.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn joined(row: (news::Model, Option<category::Model>)) -> Result<NewsRecord, ServiceError> {
    match row {
        (news, Some(category)) => Ok(NewsRecord { news, category }),
        (news, None) => Err(ServiceError::Db(format!(
            "news {} references missing category {}",
            news.id, news.category_id
        ))),
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmStore {
    async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(category::Entity::find().order_by_asc(category::Column::Id).all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<category::Model>, ServiceError> {
        Ok(category::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<category::Model>, ServiceError> {
        Ok(category::find_by_title(&self.db, title).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = category::Entity::find()
            .filter(category::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, title: &str) -> Result<category::Model, ServiceError> {
        Ok(category::create(&self.db, title).await?)
    }

    async fn update(&self, model: category::Model) -> Result<category::Model, ServiceError> {
        let am = category::ActiveModel { id: Unchanged(model.id), title: Set(model.title) };
        Ok(am.update(&self.db).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        // news rows go with it through fk_news_category ON DELETE CASCADE
        let res = category::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl NewsRepository for SeaOrmStore {
    async fn find_all(&self) -> Result<Vec<NewsRecord>, ServiceError> {
        news::Entity::find()
            .order_by_asc(news::Column::Id)
            .find_also_related(category::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .map(joined)
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<NewsRecord>, ServiceError> {
        news::Entity::find_by_id(id)
            .find_also_related(category::Entity)
            .one(&self.db)
            .await?
            .map(joined)
            .transpose()
    }

    async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<NewsRecord>, ServiceError> {
        news::Entity::find()
            .filter(news::Column::CategoryId.eq(category_id))
            .order_by_asc(news::Column::Id)
            .find_also_related(category::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .map(joined)
            .collect()
    }

    async fn insert(&self, n: NewNews) -> Result<news::Model, ServiceError> {
        Ok(news::create(&self.db, &n.title, &n.text, n.date.into(), n.category_id).await?)
    }

    async fn update(&self, model: news::Model) -> Result<news::Model, ServiceError> {
        let am = news::ActiveModel {
            id: Unchanged(model.id),
            title: Set(model.title),
            text: Set(model.text),
            date: Unchanged(model.date),
            category_id: Set(model.category_id),
        };
        Ok(am.update(&self.db).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = news::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
