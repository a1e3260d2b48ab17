//! SeaORM entities for the newsfeed schema plus connection helpers.
//!
//! Entity modules keep small write helpers (`create`, lookups) next to the
//! table definition so validation runs on every insert path.

pub mod errors;
pub mod db;
pub mod validation;
pub mod category;
pub mod news;

#[cfg(test)]
mod tests;
