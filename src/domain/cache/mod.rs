//! Cache domain - Key-value store with per-key expiry for derived data

mod key;
mod repository;

pub use key::FaqCacheKey;
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
