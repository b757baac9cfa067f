//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod faq;
pub mod language;
pub mod translation;

pub use cache::{Cache, CacheExt, FaqCacheKey};
pub use error::DomainError;
pub use faq::{FaqId, FaqRecord, FaqRepository, FaqTranslation, NewFaq, ProjectedFaq};
pub use language::LanguageCode;
pub use translation::Translator;
