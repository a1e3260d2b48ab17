/// Shared connection setup for database-backed tests
pub mod support;
