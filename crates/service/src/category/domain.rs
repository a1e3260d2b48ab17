use serde::{Deserialize, Serialize};

/// Category as seen by API callers. Owned news are never part of it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
}

impl CategoryDto {
    pub fn new(title: impl Into<String>) -> Self { Self { id: None, title: title.into() } }

    pub fn with_id(id: i64, title: impl Into<String>) -> Self { Self { id: Some(id), title: title.into() } }
}

impl From<models::category::Model> for CategoryDto {
    fn from(m: models::category::Model) -> Self { Self { id: Some(m.id), title: m.title } }
}
