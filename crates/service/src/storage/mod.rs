//! Storage backends for the category and news repositories.
//!
//! `seaorm` talks to Postgres; `memory` keeps everything in process for
//! local runs and tests.

pub mod memory;
pub mod seaorm;

pub use memory::MemoryStore;
pub use seaorm::SeaOrmStore;
