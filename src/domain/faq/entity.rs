//! FAQ entities and the language projection rule

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageCode;

/// Store-assigned FAQ identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqId(String);

impl FaqId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translated question/answer pair for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqTranslation {
    pub question: String,
    pub answer: String,
}

impl FaqTranslation {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A FAQ that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub translations: BTreeMap<LanguageCode, FaqTranslation>,
}

impl NewFaq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            translations: BTreeMap::new(),
        }
    }

    pub fn with_translation(mut self, language: LanguageCode, translation: FaqTranslation) -> Self {
        self.translations.insert(language, translation);
        self
    }

    /// Attaches the store-assigned id
    pub fn into_record(self, id: FaqId) -> FaqRecord {
        FaqRecord {
            id,
            question: self.question,
            answer: self.answer,
            translations: self.translations,
        }
    }
}

/// A persisted FAQ with its canonical text and precomputed translations
///
/// A language missing from `translations` has no translation available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub translations: BTreeMap<LanguageCode, FaqTranslation>,
}

impl FaqRecord {
    /// Returns the view of this FAQ in `language`
    ///
    /// Uses the stored translation when present. Canonical text fills in for
    /// a missing translation and for any empty translated field.
    pub fn project(&self, language: LanguageCode) -> ProjectedFaq {
        let translation = if language.is_canonical() {
            None
        } else {
            self.translations.get(&language)
        };

        match translation {
            Some(t) => ProjectedFaq {
                question: non_empty_or(&t.question, &self.question),
                answer: non_empty_or(&t.answer, &self.answer),
            },
            None => ProjectedFaq {
                question: self.question.clone(),
                answer: self.answer.clone(),
            },
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Language-specific view of a FAQ returned to clients and cached per language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedFaq {
    pub question: String,
    pub answer: String,
}
