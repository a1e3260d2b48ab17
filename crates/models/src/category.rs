use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::validation::validate_title;
use crate::{errors, news};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    News,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::News => Entity::has_many(news::Entity).into(),
        }
    }
}

impl Related<news::Entity> for Entity {
    fn to() -> RelationDef { Relation::News.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, title: &str) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    let am = ActiveModel {
        title: Set(title.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// First category carrying `title`, lowest id wins when titles collide.
pub async fn find_by_title(db: &DatabaseConnection, title: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Title.eq(title))
        .order_by_asc(Column::Id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
