//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//! This crate contains the database, counter store and in-memory adapters.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `redis` - Redis-backed like counters

pub mod counter;
pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use counter::InMemoryCounterStore;
pub use database::DatabaseConfig;
pub use memory::InMemoryBoardStore;

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::PostgresStore;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use counter::{RedisConfig, RedisCounterStore};
