//! Core utilities shared by every export job
//!
//! - `cache`: in-memory LRU memo for repeated API lookups
//! - `clock`: US Eastern timestamp formatting
//! - `tables`: CSV table reading and writing

pub mod cache;
pub mod clock;
pub mod tables;

pub use cache::MemoryCache;
pub use tables::{read_table, read_table_or_empty, write_table, write_table_atomic, Table};
