use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::cache::{CacheConfig, CacheType};
use crate::infrastructure::faq::{MongoConfig, StoreConfig, StoreType};
use crate::infrastructure::services::{FaqReadConfig, FaqWriteConfig};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
    pub cache: CacheSettings,
    pub translation: TranslationSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Durable FAQ store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `in_memory` or `mongodb`
    pub backend: String,
    pub mongodb_url: String,
    pub database: String,
    pub collection: String,
    pub timeout_ms: u64,
}

/// Projection cache settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// `in_memory` or `redis`
    pub backend: String,
    pub redis_url: Option<String>,
    pub key_prefix: Option<String>,
    pub ttl_secs: u64,
    pub max_capacity: u64,
    pub timeout_ms: u64,
}

/// Translation provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub provider: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "in_memory".to_string(),
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database: "faqdb".to_string(),
            collection: "faqs".to_string(),
            timeout_ms: 5_000,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: "in_memory".to_string(),
            redis_url: None,
            key_prefix: None,
            ttl_secs: 3_600,
            max_capacity: 1_000,
            timeout_ms: 1_000,
        }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: "google".to_string(),
            base_url: "https://translate.googleapis.com".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl AppConfig {
    /// Loads `config/default`, `config/local`, then `APP__*` variables.
    /// A bare `PORT` variable overrides the server port.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn store_config(&self) -> Result<StoreConfig, crate::domain::DomainError> {
        let settings = &self.storage;

        match settings.backend.parse::<StoreType>()? {
            StoreType::InMemory => Ok(StoreConfig::in_memory()),
            StoreType::MongoDb => Ok(StoreConfig::MongoDb(
                MongoConfig::new(settings.mongodb_url.clone())
                    .with_database(settings.database.clone())
                    .with_collection(settings.collection.clone())
                    .with_connect_timeout(Duration::from_millis(settings.timeout_ms)),
            )),
        }
    }

    pub fn cache_config(&self) -> Result<CacheConfig, crate::domain::DomainError> {
        let settings = &self.cache;

        Ok(CacheConfig {
            cache_type: settings.backend.parse::<CacheType>()?,
            redis_url: settings.redis_url.clone(),
            key_prefix: settings.key_prefix.clone(),
            ttl: Duration::from_secs(settings.ttl_secs),
            max_capacity: settings.max_capacity,
            connect_timeout: Duration::from_millis(settings.timeout_ms),
        })
    }

    pub fn read_config(&self) -> FaqReadConfig {
        FaqReadConfig::default()
            .with_ttl(Duration::from_secs(self.cache.ttl_secs))
            .with_cache_timeout(Duration::from_millis(self.cache.timeout_ms))
            .with_store_timeout(Duration::from_millis(self.storage.timeout_ms))
    }

    pub fn write_config(&self) -> FaqWriteConfig {
        FaqWriteConfig::default()
            .with_translation_timeout(Duration::from_millis(self.translation.timeout_ms))
            .with_store_timeout(Duration::from_millis(self.storage.timeout_ms))
    }
}
