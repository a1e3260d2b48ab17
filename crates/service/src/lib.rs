//! Service layer providing CRUD operations for categories and news.
//! - Separates business rules (title resolution, not-found checks) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Repositories are traits so the same services run on Postgres or in memory.

pub mod errors;
pub mod crud;
pub mod category;
pub mod news;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use crud::CrudService;
pub use errors::ServiceError;
