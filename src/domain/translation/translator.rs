//! Translator trait definition

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::language::LanguageCode;

#[cfg(test)]
use mockall::automock;

/// Stateless wrapper over an external translation function
///
/// Every call is an independent unit of failure; implementations report
/// failures as `DomainError::TranslationFailed`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Translator: Send + Sync + std::fmt::Debug {
    /// Translates `text` into `target`
    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, DomainError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}
