//! Store factory for runtime backend selection

use std::sync::Arc;

use crate::domain::faq::FaqRepository;
use crate::domain::DomainError;

use super::in_memory::InMemoryFaqRepository;
use super::mongodb::{MongoConfig, MongoFaqRepository};

/// Supported store types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreType {
    /// In-memory store (for testing/development)
    InMemory,
    /// MongoDB collection
    MongoDb,
}

impl std::str::FromStr for StoreType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}. Valid backends: in_memory, mongodb",
                s
            ))),
        }
    }
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// In-memory store configuration
    InMemory,
    /// MongoDB store configuration
    MongoDb(MongoConfig),
}

impl StoreConfig {
    /// Creates an in-memory store configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }
}

/// Factory for creating store instances
#[derive(Debug)]
pub struct StoreFactory;

impl StoreFactory {
    /// Creates a store instance based on the configuration
    pub async fn create(config: &StoreConfig) -> Result<Arc<dyn FaqRepository>, DomainError> {
        match config {
            StoreConfig::InMemory => Ok(Arc::new(InMemoryFaqRepository::new())),
            StoreConfig::MongoDb(mongo_config) => {
                let repository = MongoFaqRepository::connect(mongo_config).await?;
                Ok(Arc::new(repository))
            }
        }
    }
}
