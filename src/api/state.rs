//! Application state for shared services

use std::sync::Arc;
use std::time::Duration;

use crate::domain::cache::Cache;
use crate::domain::faq::{FaqRecord, FaqRepository, ProjectedFaq};
use crate::domain::{DomainError, LanguageCode};
use crate::infrastructure::services::{CreateFaqRequest, FaqReadService, FaqWriteService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub read_service: Arc<dyn FaqReadServiceTrait>,
    pub write_service: Arc<dyn FaqWriteServiceTrait>,
    /// Probed by readiness checks
    pub repository: Arc<dyn FaqRepository>,
    /// Probed by readiness checks
    pub cache: Arc<dyn Cache>,
    /// Bounds on the readiness pings
    pub probe_timeouts: ProbeTimeouts,
}

/// Upper bounds for the store and cache pings behind `/ready`
#[derive(Debug, Clone, Copy)]
pub struct ProbeTimeouts {
    pub store: Duration,
    pub cache: Duration,
}

impl Default for ProbeTimeouts {
    fn default() -> Self {
        Self {
            store: Duration::from_secs(5),
            cache: Duration::from_secs(1),
        }
    }
}

/// Trait for the FAQ read path
#[async_trait::async_trait]
pub trait FaqReadServiceTrait: Send + Sync {
    async fn get_faqs(&self, language: LanguageCode) -> Result<Vec<ProjectedFaq>, DomainError>;
}

/// Trait for the FAQ write path
#[async_trait::async_trait]
pub trait FaqWriteServiceTrait: Send + Sync {
    async fn create_faq(&self, request: CreateFaqRequest) -> Result<FaqRecord, DomainError>;
}

#[async_trait::async_trait]
impl FaqReadServiceTrait for FaqReadService {
    async fn get_faqs(&self, language: LanguageCode) -> Result<Vec<ProjectedFaq>, DomainError> {
        FaqReadService::get_faqs(self, language).await
    }
}

#[async_trait::async_trait]
impl FaqWriteServiceTrait for FaqWriteService {
    async fn create_faq(&self, request: CreateFaqRequest) -> Result<FaqRecord, DomainError> {
        FaqWriteService::create_faq(self, request).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        read_service: Arc<dyn FaqReadServiceTrait>,
        write_service: Arc<dyn FaqWriteServiceTrait>,
        repository: Arc<dyn FaqRepository>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            read_service,
            write_service,
            repository,
            cache,
            probe_timeouts: ProbeTimeouts::default(),
        }
    }

    pub fn with_probe_timeouts(mut self, probe_timeouts: ProbeTimeouts) -> Self {
        self.probe_timeouts = probe_timeouts;
        self
    }

    /// Releases store connections after the server has drained
    pub async fn shutdown(&self) {
        self.repository.shutdown().await;
    }
}
