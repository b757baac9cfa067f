//! FAQ read path - cache-aside lookup of per-language projections

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::cache::{Cache, CacheExt, FaqCacheKey};
use crate::domain::faq::{FaqRepository, ProjectedFaq};
use crate::domain::language::LanguageCode;
use crate::domain::DomainError;

/// Configuration for the read path
#[derive(Debug, Clone)]
pub struct FaqReadConfig {
    /// Lifetime of a cached projection
    pub ttl: Duration,
    /// Bound on each cache call
    pub cache_timeout: Duration,
    /// Bound on the store query
    pub store_timeout: Duration,
}

impl Default for FaqReadConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600), // 1 hour
            cache_timeout: Duration::from_secs(1),
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl FaqReadConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_cache_timeout(mut self, cache_timeout: Duration) -> Self {
        self.cache_timeout = cache_timeout;
        self
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }
}

/// Serves FAQ projections, populating the cache on miss
///
/// The cache is never the source of truth: any cache failure degrades to a
/// store read, and only complete projections are ever written back.
#[derive(Debug)]
pub struct FaqReadService {
    repository: Arc<dyn FaqRepository>,
    cache: Arc<dyn Cache>,
    config: FaqReadConfig,
}

impl FaqReadService {
    pub fn new(repository: Arc<dyn FaqRepository>, cache: Arc<dyn Cache>) -> Self {
        Self::with_config(repository, cache, FaqReadConfig::default())
    }

    pub fn with_config(
        repository: Arc<dyn FaqRepository>,
        cache: Arc<dyn Cache>,
        config: FaqReadConfig,
    ) -> Self {
        Self {
            repository,
            cache,
            config,
        }
    }

    /// Returns every FAQ projected into `language`, in store order
    pub async fn get_faqs(&self, language: LanguageCode) -> Result<Vec<ProjectedFaq>, DomainError> {
        let key = FaqCacheKey::for_language(language);

        if let Some(faqs) = self.cached(&key).await {
            debug!(key = %key, count = faqs.len(), "FAQ cache hit");
            return Ok(faqs);
        }

        debug!(key = %key, "FAQ cache miss");

        let records = match timeout(self.config.store_timeout, self.repository.find_all()).await {
            Ok(result) => result.map_err(into_store_unavailable)?,
            Err(_) => {
                return Err(DomainError::store_unavailable(format!(
                    "Store query timed out after {}ms",
                    self.config.store_timeout.as_millis()
                )));
            }
        };

        let faqs: Vec<ProjectedFaq> = records.iter().map(|r| r.project(language)).collect();

        self.populate(&key, &faqs).await;

        Ok(faqs)
    }

    async fn cached(&self, key: &FaqCacheKey) -> Option<Vec<ProjectedFaq>> {
        match timeout(self.config.cache_timeout, self.cache.get(key.as_str())).await {
            Ok(Ok(faqs)) => faqs,
            Ok(Err(e)) => {
                warn!(key = %key, error_kind = e.kind(), error = %e, "Cache read failed, falling back to store");
                None
            }
            Err(_) => {
                warn!(key = %key, error_kind = "cache_unavailable", "Cache read timed out, falling back to store");
                None
            }
        }
    }

    async fn populate(&self, key: &FaqCacheKey, faqs: &[ProjectedFaq]) {
        match timeout(
            self.config.cache_timeout,
            self.cache.set(key.as_str(), &faqs, self.config.ttl),
        )
        .await
        {
            Ok(Ok(())) => {
                debug!(key = %key, count = faqs.len(), ttl_secs = self.config.ttl.as_secs(), "FAQ projection cached");
            }
            Ok(Err(e)) => {
                warn!(key = %key, error_kind = e.kind(), error = %e, "Failed to cache FAQ projection");
            }
            Err(_) => {
                warn!(key = %key, error_kind = "cache_unavailable", "Caching FAQ projection timed out");
            }
        }
    }
}

fn into_store_unavailable(err: DomainError) -> DomainError {
    match err {
        DomainError::StoreUnavailable { .. } => err,
        other => DomainError::store_unavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCache;
    use crate::domain::faq::{FaqId, FaqRecord, FaqTranslation, MockFaqRepository, NewFaq};
    use crate::infrastructure::cache::InMemoryCache;
    use crate::infrastructure::faq::InMemoryFaqRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_records() -> Vec<FaqRecord> {
        vec![
            NewFaq::new("Q", "A")
                .with_translation(LanguageCode::Hi, FaqTranslation::new("प्र", "उ"))
                .into_record(FaqId::new("1")),
            NewFaq::new("Q2", "A2").into_record(FaqId::new("2")),
        ]
    }

    /// Counts store queries and optionally delays them
    #[derive(Debug)]
    struct CountingRepository {
        inner: InMemoryFaqRepository,
        queries: AtomicUsize,
        delay: Duration,
    }

    impl CountingRepository {
        fn new(records: Vec<FaqRecord>) -> Self {
            Self {
                inner: InMemoryFaqRepository::with_records(records),
                queries: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn queries(&self) -> usize {
            self.queries.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FaqRepository for CountingRepository {
        async fn find_all(&self) -> Result<Vec<FaqRecord>, DomainError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.inner.find_all().await
        }

        async fn insert(&self, faq: NewFaq) -> Result<FaqRecord, DomainError> {
            self.inner.insert(faq).await
        }
    }

    #[tokio::test]
    async fn test_cold_cache_queries_store_once_then_serves_from_cache() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache = Arc::new(MockCache::new());
        let service = FaqReadService::new(repository.clone(), cache.clone());

        let first = service.get_faqs(LanguageCode::En).await.unwrap();
        assert_eq!(repository.queries(), 1);
        assert_eq!(cache.set_count(), 1);

        let second = service.get_faqs(LanguageCode::En).await.unwrap();
        assert_eq!(repository.queries(), 1);
        assert_eq!(cache.set_count(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_miss_writes_projection_under_language_key_with_ttl() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache = Arc::new(MockCache::new());
        let service = FaqReadService::new(repository, cache.clone());

        service.get_faqs(LanguageCode::Hi).await.unwrap();

        assert_eq!(cache.ttl_of("faqs_hi"), Some(Duration::from_secs(3600)));
        let cached: Vec<ProjectedFaq> = serde_json::from_str(&cache.raw("faqs_hi").unwrap()).unwrap();
        assert_eq!(cached[0].question, "प्र");
        assert!(cache.raw("faqs_en").is_none());
    }

    #[tokio::test]
    async fn test_projection_falls_back_per_record() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let service = FaqReadService::new(repository, Arc::new(MockCache::new()));

        let hindi = service.get_faqs(LanguageCode::Hi).await.unwrap();
        assert_eq!(hindi[0], ProjectedFaq { question: "प्र".into(), answer: "उ".into() });
        assert_eq!(hindi[1], ProjectedFaq { question: "Q2".into(), answer: "A2".into() });

        let bengali = service.get_faqs(LanguageCode::Bn).await.unwrap();
        assert_eq!(bengali[0], ProjectedFaq { question: "Q".into(), answer: "A".into() });
    }

    #[tokio::test]
    async fn test_cache_hit_skips_store() {
        let cached = vec![ProjectedFaq { question: "cached".into(), answer: "value".into() }];
        let cache = Arc::new(MockCache::new().with_entry("faqs_bn", &cached));

        let mut repository = MockFaqRepository::new();
        repository.expect_find_all().times(0);

        let service = FaqReadService::new(Arc::new(repository), cache.clone());
        let faqs = service.get_faqs(LanguageCode::Bn).await.unwrap();

        assert_eq!(faqs, cached);
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test]
    async fn test_cache_error_is_treated_as_miss() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache = Arc::new(MockCache::new().with_error("connection refused"));
        let service = FaqReadService::new(repository.clone(), cache);

        let faqs = service.get_faqs(LanguageCode::En).await.unwrap();

        assert_eq!(faqs.len(), 2);
        assert_eq!(repository.queries(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_is_treated_as_miss() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache = Arc::new(MockCache::new().with_raw_entry("faqs_en", "{not json"));
        let service = FaqReadService::new(repository.clone(), cache.clone());

        let faqs = service.get_faqs(LanguageCode::En).await.unwrap();

        assert_eq!(faqs.len(), 2);
        assert_eq!(repository.queries(), 1);
        assert_eq!(cache.set_count(), 1);
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_returns_faqs() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache = Arc::new(MockCache::new().with_set_error("read-only replica"));
        let service = FaqReadService::new(repository, cache);

        let faqs = service.get_faqs(LanguageCode::Hi).await.unwrap();
        assert_eq!(faqs.len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_cached() {
        let mut repository = MockFaqRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .returning(|| Err(DomainError::store_unavailable("connection reset")));

        let cache = Arc::new(MockCache::new());
        let service = FaqReadService::new(Arc::new(repository), cache.clone());

        let result = service.get_faqs(LanguageCode::En).await;

        assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test]
    async fn test_store_timeout_maps_to_store_unavailable() {
        let repository = Arc::new(
            CountingRepository::new(sample_records()).with_delay(Duration::from_millis(200)),
        );
        let cache = Arc::new(MockCache::new());
        let config = FaqReadConfig::default().with_store_timeout(Duration::from_millis(20));
        let service = FaqReadService::with_config(repository, cache.clone(), config);

        let result = service.get_faqs(LanguageCode::En).await;

        assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_language_served_from_canonical_key() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache = Arc::new(MockCache::new());
        let service = FaqReadService::new(repository.clone(), cache.clone());

        service.get_faqs(LanguageCode::resolve("fr")).await.unwrap();
        service.get_faqs(LanguageCode::En).await.unwrap();

        assert_eq!(repository.queries(), 1);
        assert!(cache.raw("faqs_en").is_some());
    }

    #[tokio::test]
    async fn test_concurrent_cold_misses_agree() {
        let repository = Arc::new(
            CountingRepository::new(sample_records()).with_delay(Duration::from_millis(20)),
        );
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());
        let service = Arc::new(FaqReadService::new(repository.clone(), cache));

        let callers = 8;
        let handles: Vec<_> = (0..callers)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.get_faqs(LanguageCode::En).await.unwrap() })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert!(repository.queries() >= 1);
        assert!(repository.queries() <= callers);
    }

    #[tokio::test]
    async fn test_expired_projection_is_recomputed() {
        let repository = Arc::new(CountingRepository::new(sample_records()));
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());
        let config = FaqReadConfig::default().with_ttl(Duration::from_millis(50));
        let service = FaqReadService::with_config(repository.clone(), cache, config);

        service.get_faqs(LanguageCode::Bn).await.unwrap();
        service.get_faqs(LanguageCode::Bn).await.unwrap();
        assert_eq!(repository.queries(), 1);

        tokio::time::sleep(Duration::from_millis(120)).await;

        service.get_faqs(LanguageCode::Bn).await.unwrap();
        assert_eq!(repository.queries(), 2);
    }
}
