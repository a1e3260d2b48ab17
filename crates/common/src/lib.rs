//! Shared building blocks for the newsfeed crates: logging setup and small
//! wire types that do not belong to a single domain.

pub mod types;
pub mod utils;
