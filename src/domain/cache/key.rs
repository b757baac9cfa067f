//! Cache key for per-language FAQ projections

use std::fmt;

use crate::domain::language::LanguageCode;

const FAQ_KEY_PREFIX: &str = "faqs_";

/// Key under which the projection of all FAQs for one language is cached
///
/// Formatted as `faqs_<code>`. Unknown client codes resolve to `en` before a
/// key is built, so the key space is bounded by the supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaqCacheKey(String);

impl FaqCacheKey {
    pub fn for_language(language: LanguageCode) -> Self {
        Self(format!("{}{}", FAQ_KEY_PREFIX, language.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaqCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
