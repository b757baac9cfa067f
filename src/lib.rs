//! Multilingual FAQ service
//!
//! FAQs are translated into every supported language when they are created
//! and served per language through a time-bounded cache:
//! - In-memory or MongoDB storage
//! - In-memory (moka) or Redis caching
//! - Google Translate as the translation provider

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use api::state::{AppState, ProbeTimeouts};
use domain::translation::Translator;
use domain::DomainError;
use infrastructure::{
    cache::CacheFactory,
    faq::StoreFactory,
    services::{FaqReadService, FaqWriteService},
    translation::{GoogleTranslator, HttpClient},
};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let store_config = config.store_config()?;
    info!(backend = %config.storage.backend, "Initializing FAQ store");
    let repository = StoreFactory::create(&store_config)
        .await
        .context("failed to initialize FAQ store")?;

    let cache_config = config.cache_config()?;
    info!(backend = %cache_config.cache_type, ttl_secs = config.cache.ttl_secs, "Initializing cache");
    let cache = CacheFactory::new()
        .create(&cache_config)
        .context("failed to initialize cache")?;

    let translator = create_translator(config)?;
    info!(provider = translator.provider_name(), "Translation provider ready");

    let read_service = FaqReadService::with_config(repository.clone(), cache.clone(), config.read_config());
    let write_service = FaqWriteService::with_config(repository.clone(), translator, config.write_config());

    let probe_timeouts = ProbeTimeouts {
        store: Duration::from_millis(config.storage.timeout_ms),
        cache: Duration::from_millis(config.cache.timeout_ms),
    };

    Ok(AppState::new(
        Arc::new(read_service),
        Arc::new(write_service),
        repository,
        cache,
    )
    .with_probe_timeouts(probe_timeouts))
}

fn create_translator(config: &AppConfig) -> Result<Arc<dyn Translator>, DomainError> {
    let settings = &config.translation;

    match settings.provider.to_lowercase().as_str() {
        "google" => {
            let client = HttpClient::with_timeout(Duration::from_millis(settings.timeout_ms))?;
            Ok(Arc::new(GoogleTranslator::with_base_url(client, settings.base_url.clone())))
        }
        other => Err(DomainError::configuration(format!(
            "Unknown translation provider: {}. Valid providers: google",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_default_state_uses_in_memory_backends() {
        let state = create_app_state().await.unwrap();

        assert!(state.read_service.get_faqs(domain::LanguageCode::En).await.unwrap().is_empty());
        state.shutdown().await;
    }

    #[tokio::test]
    async fn test_unknown_translation_provider_is_rejected() {
        let mut config = AppConfig::default();
        config.translation.provider = "deepl".to_string();

        let result = create_app_state_with_config(&config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_redis_does_not_block_startup() {
        let mut config = AppConfig::default();
        config.cache.backend = "redis".to_string();
        config.cache.redis_url = Some("redis://127.0.0.1:1".to_string());
        config.cache.timeout_ms = 200;

        let state = create_app_state_with_config(&config).await.unwrap();
        assert_eq!(state.probe_timeouts.cache, Duration::from_millis(200));

        let response = api::create_router(state)
            .oneshot(Request::builder().uri("/api/faqs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"[]");
    }
}
