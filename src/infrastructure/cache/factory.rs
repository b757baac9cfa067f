//! Runtime selection of the projection cache backend

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::domain::cache::Cache;
use crate::domain::DomainError;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheType {
    /// Process-local moka cache
    #[default]
    InMemory,
    /// Shared Redis server
    Redis,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheType::InMemory => write!(f, "in_memory"),
            CacheType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for CacheType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(CacheType::InMemory),
            "redis" => Ok(CacheType::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown cache backend: {}. Valid backends: in_memory, redis",
                s
            ))),
        }
    }
}

/// Backend-independent cache settings
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub cache_type: CacheType,
    /// Required for `Redis`
    pub redis_url: Option<String>,
    /// Namespace for Redis keys
    pub key_prefix: Option<String>,
    /// Upper bound on entry lifetime
    pub ttl: Duration,
    /// Entry limit of the in-memory backend
    pub max_capacity: u64,
    /// Bound on establishing the Redis connection
    pub connect_timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: CacheType::InMemory,
            redis_url: None,
            key_prefix: None,
            ttl: Duration::from_secs(3600),
            max_capacity: 1_000,
            connect_timeout: Duration::from_secs(1),
        }
    }
}

/// Builds the cache selected by `CacheConfig`
///
/// Redis connects lazily, so an unreachable server does not fail here.
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, config: &CacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
        match config.cache_type {
            CacheType::InMemory => {
                let in_memory = InMemoryCacheConfig::default()
                    .with_max_capacity(config.max_capacity)
                    .with_max_ttl(config.ttl);

                Ok(Arc::new(InMemoryCache::with_config(in_memory)))
            }
            CacheType::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    DomainError::configuration("cache.redis_url is required for the redis backend")
                })?;

                let mut redis_config =
                    RedisCacheConfig::new(url).with_connection_timeout(config.connect_timeout);

                if let Some(prefix) = &config.key_prefix {
                    redis_config = redis_config.with_key_prefix(prefix.clone());
                }

                info!(prefix = ?config.key_prefix, "Redis cache configured, connecting on first use");
                Ok(Arc::new(RedisCache::new(redis_config)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::CacheExt;

    #[test]
    fn test_cache_type_from_str() {
        assert_eq!("in_memory".parse::<CacheType>().unwrap(), CacheType::InMemory);
        assert_eq!("memory".parse::<CacheType>().unwrap(), CacheType::InMemory);
        assert_eq!("REDIS".parse::<CacheType>().unwrap(), CacheType::Redis);
        assert!(matches!(
            "memcached".parse::<CacheType>(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn test_factory_create_in_memory() {
        let cache = CacheFactory::new().create(&CacheConfig::default()).unwrap();

        cache
            .set("faqs_en", &"value", Duration::from_secs(60))
            .await
            .unwrap();

        let result: Option<String> = cache.get("faqs_en").await.unwrap();
        assert_eq!(result, Some("value".to_string()));
    }

    #[test]
    fn test_factory_redis_requires_url() {
        let config = CacheConfig {
            cache_type: CacheType::Redis,
            ..Default::default()
        };

        let result = CacheFactory::new().create(&config);
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_factory_redis_does_not_connect_eagerly() {
        let config = CacheConfig {
            cache_type: CacheType::Redis,
            redis_url: Some("redis://127.0.0.1:1".to_string()),
            key_prefix: Some("faq".to_string()),
            connect_timeout: Duration::from_millis(200),
            ..Default::default()
        };

        let cache = CacheFactory::new().create(&config).unwrap();
        assert!(matches!(
            cache.get_raw("faqs_en").await,
            Err(DomainError::CacheUnavailable { .. })
        ));
    }
}
