//! Field rules applied before any category or news row is written.

use crate::errors::ModelError;

/// Column width of `categories.title` and `news.title`.
pub const TITLE_MAX_LEN: usize = 255;

/// Non-blank and at most [`TITLE_MAX_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(ModelError::Validation(format!("title longer than {TITLE_MAX_LEN} characters")));
    }
    Ok(())
}
