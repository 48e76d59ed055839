//! Local SQLite store for draft boards
//!
//! - `models`: Data structures
//! - `schema`: Database connection and table management
//! - `queries`: Draft pick CRUD operations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::DraftPickRecord;
pub use schema::DraftDatabase;
