//! FAQ write path - translate on create, then persist

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::domain::faq::{FaqRecord, FaqRepository, FaqTranslation, NewFaq};
use crate::domain::language::LanguageCode;
use crate::domain::translation::Translator;
use crate::domain::DomainError;

/// Request to create a new FAQ
#[derive(Debug, Clone)]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
}

/// Configuration for the write path
#[derive(Debug, Clone)]
pub struct FaqWriteConfig {
    /// Languages each new FAQ is translated into, in call order
    pub targets: Vec<LanguageCode>,
    /// Bound on each translation call
    pub translation_timeout: Duration,
    /// Bound on the insert
    pub store_timeout: Duration,
}

impl Default for FaqWriteConfig {
    fn default() -> Self {
        Self {
            targets: LanguageCode::TARGETS.to_vec(),
            translation_timeout: Duration::from_secs(10),
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl FaqWriteConfig {
    pub fn with_translation_timeout(mut self, translation_timeout: Duration) -> Self {
        self.translation_timeout = translation_timeout;
        self
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }
}

/// Creates FAQs carrying a translation for every target language
///
/// All translations are obtained before anything is written, so a record is
/// either persisted with every configured translation or not at all. Cached
/// projections are not touched; they refresh when their TTL runs out.
#[derive(Debug)]
pub struct FaqWriteService {
    repository: Arc<dyn FaqRepository>,
    translator: Arc<dyn Translator>,
    config: FaqWriteConfig,
}

impl FaqWriteService {
    pub fn new(repository: Arc<dyn FaqRepository>, translator: Arc<dyn Translator>) -> Self {
        Self::with_config(repository, translator, FaqWriteConfig::default())
    }

    pub fn with_config(
        repository: Arc<dyn FaqRepository>,
        translator: Arc<dyn Translator>,
        mut config: FaqWriteConfig,
    ) -> Self {
        config.targets.retain(|language| !language.is_canonical());
        config.targets.dedup();

        Self {
            repository,
            translator,
            config,
        }
    }

    /// Translates, assembles and persists a new FAQ
    pub async fn create_faq(&self, request: CreateFaqRequest) -> Result<FaqRecord, DomainError> {
        validate_text("question", &request.question)?;
        validate_text("answer", &request.answer)?;

        let mut faq = NewFaq::new(request.question, request.answer);

        for &language in &self.config.targets {
            let question = self.translate(&faq.question, language).await?;
            let answer = self.translate(&faq.answer, language).await?;
            faq = faq.with_translation(language, FaqTranslation::new(question, answer));
        }

        let record = match timeout(self.config.store_timeout, self.repository.insert(faq)).await {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                error!(error_kind = "persist_failed", error = %e, "Failed to persist FAQ");
                return Err(DomainError::persist_failed(e.to_string()));
            }
            Err(_) => {
                error!(error_kind = "persist_failed", "FAQ insert timed out");
                return Err(DomainError::persist_failed(format!(
                    "Insert timed out after {}ms",
                    self.config.store_timeout.as_millis()
                )));
            }
        };

        info!(faq_id = %record.id, translations = record.translations.len(), "FAQ created");
        Ok(record)
    }

    async fn translate(&self, text: &str, language: LanguageCode) -> Result<String, DomainError> {
        let provider = self.translator.provider_name();

        let translated = match timeout(
            self.config.translation_timeout,
            self.translator.translate(text, language),
        )
        .await
        {
            Ok(Ok(translated)) => translated,
            Ok(Err(e)) => {
                error!(provider, language = %language, error = %e, "Translation failed");
                return Err(match e {
                    DomainError::TranslationFailed { .. } => e,
                    other => DomainError::translation_failed(language, other.to_string()),
                });
            }
            Err(_) => {
                error!(provider, language = %language, "Translation timed out");
                return Err(DomainError::translation_failed(
                    language,
                    format!(
                        "{} timed out after {}ms",
                        provider,
                        self.config.translation_timeout.as_millis()
                    ),
                ));
            }
        };

        if translated.trim().is_empty() {
            return Err(DomainError::translation_failed(
                language,
                format!("{} returned an empty translation", provider),
            ));
        }

        debug!(provider, language = %language, "Translated text");
        Ok(translated)
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("FAQ {} must not be empty", field)));
    }
    Ok(())
}
