use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Carries the caller-facing text verbatim, e.g. "News not found with id: 3".
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, key: &str, value: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} not found with {key}: {value}"))
    }

    pub fn category_not_found(id: i64) -> Self { Self::not_found("Category", "id", id) }

    pub fn category_title_not_found(title: &str) -> Self { Self::not_found("Category", "title", title) }

    pub fn news_not_found(id: i64) -> Self { Self::not_found("News", "id", id) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_are_verbatim() {
        assert_eq!(ServiceError::category_not_found(5).to_string(), "Category not found with id: 5");
        assert_eq!(
            ServiceError::category_title_not_found("Sport").to_string(),
            "Category not found with title: Sport"
        );
        assert_eq!(ServiceError::news_not_found(9).to_string(), "News not found with id: 9");
    }

    #[test]
    fn model_errors_display_transparently() {
        let e: ServiceError = models::errors::ModelError::Validation("title required".into()).into();
        assert!(matches!(e, ServiceError::Model(_)));
        assert_eq!(e.to_string(), "validation error: title required");
    }
}
