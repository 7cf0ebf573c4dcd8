//! Counter store implementations - Redis and in-memory fallback.

mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use memory::InMemoryCounterStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisCounterStore};
