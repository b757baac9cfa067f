use thiserror::Error;

use super::language::LanguageCode;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Cache unavailable: {message}")]
    CacheUnavailable { message: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Translation to '{language}' failed: {message}")]
    TranslationFailed {
        language: LanguageCode,
        message: String,
    },

    #[error("Persist failed: {message}")]
    PersistFailed { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn cache_unavailable(message: impl Into<String>) -> Self {
        Self::CacheUnavailable {
            message: message.into(),
        }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn translation_failed(language: LanguageCode, message: impl Into<String>) -> Self {
        Self::TranslationFailed {
            language,
            message: message.into(),
        }
    }

    pub fn persist_failed(message: impl Into<String>) -> Self {
        Self::PersistFailed {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable label for structured logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::CacheUnavailable { .. } => "cache_unavailable",
            Self::StoreUnavailable { .. } => "store_unavailable",
            Self::TranslationFailed { .. } => "translation_failed",
            Self::PersistFailed { .. } => "persist_failed",
            Self::Configuration { .. } => "configuration",
            Self::Internal { .. } => "internal",
        }
    }
}
