use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// News item as seen by API callers.
///
/// The category is referenced by title on the wire. `id` and `date` are
/// assigned by the server; values sent by callers are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "category")]
    pub category_title: String,
}

impl NewsDto {
    pub fn new(title: impl Into<String>, text: impl Into<String>, category_title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            text: text.into(),
            date: None,
            category_title: category_title.into(),
        }
    }
}

/// A stored news row joined with the category that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsRecord {
    pub news: models::news::Model,
    pub category: models::category::Model,
}

impl From<NewsRecord> for NewsDto {
    fn from(r: NewsRecord) -> Self {
        Self {
            id: Some(r.news.id),
            title: r.news.title,
            text: r.news.text,
            date: Some(to_wire_date(r.news.date)),
            category_title: r.category.title,
        }
    }
}

/// Fields of a news row before the store assigns its id.
#[derive(Clone, Debug)]
pub struct NewNews {
    pub title: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub category_id: i64,
}

/// Dates leave the service in UTC with whole seconds.
pub fn to_wire_date(date: sea_orm::prelude::DateTimeWithTimeZone) -> DateTime<Utc> {
    date.with_timezone(&Utc).trunc_subsecs(0)
}
